use crate::apple::Apple;
use crate::clock::Clock;
use crate::config::Config;
use crate::draw::{Canvas, Drawable, BOARD_BACKGROUND_COLOR};
use crate::grid::Grid;
use crate::snake::{Snake, Direction::{*, self}};
use crate::term::TermManager;

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyModifiers, KeyCode};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    Crashed,
    BoardFull,
}

/// What the player asked for during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Turn(Direction),
    Quit,
}

/// Snake and apple on a shared grid, advanced one tick at a time.
pub struct SnakeGame<R: Rng> {
    snake: Snake,
    apple: Apple,
    rng: R,
}

impl<R: Rng> SnakeGame<R> {
    pub fn new(grid: Grid, mut rng: R) -> Self {
        let snake = Snake::new(grid);
        let apple = Apple::new(grid, &mut rng);
        SnakeGame { snake, apple, rng }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    /// Advances one tick. `turns` are the direction keys pressed since the last
    /// tick, oldest first; each goes through the reversal check in order.
    pub fn tick(&mut self, turns: &[Direction]) -> TickOutcome {
        for dir in turns {
            self.snake.set_pending_direction(*dir);
        }

        self.snake.apply_pending_direction();
        self.snake.advance();

        let mut outcome = TickOutcome::Moved;

        if self.snake.head_position() == self.apple.position() {
            if self.apple.relocate_avoiding(self.snake.positions(), &mut self.rng) {
                self.snake.grow();
                log::debug!("apple eaten, length is now {}", self.snake.length());
                outcome = TickOutcome::Ate;
            } else {
                log::info!("board full at length {}, starting over", self.snake.length());
                self.restart();
                return TickOutcome::BoardFull;
            }
        }

        if self.snake.detect_self_collision() {
            log::info!("snake ran into itself at length {}, starting over", self.snake.length());
            self.restart();
            outcome = TickOutcome::Crashed;
        }

        outcome
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) -> Result<()> {
        canvas.fill(BOARD_BACKGROUND_COLOR)?;
        self.snake.draw(canvas)?;
        self.apple.draw(canvas)?;
        canvas.present()
    }

    fn restart(&mut self) {
        self.snake.reset(&mut self.rng);
        // Only the centre is taken, so a free cell always remains
        let placed = self.apple.relocate_avoiding(self.snake.positions(), &mut self.rng);
        debug_assert!(placed, "no free cell for the apple after a reset");
    }
}

/// Everything the loop needs from the outside world.
pub struct Context {
    pub term: TermManager,
    pub clock: Clock,
    pub speed: u32,
}

pub fn run(config: &Config) -> Result<()> {
    let mut term = TermManager::new(config.width, config.height)?;
    term.setup()?;

    let mut ctx = Context { term, clock: Clock::new(), speed: config.speed };
    let mut game = SnakeGame::new(config.grid(), rand::thread_rng());

    let result = game_loop(&mut ctx, &mut game);

    // Restore even when the loop failed, then report whichever error came first
    let restored = ctx.term.restore();
    result.and(restored)
}

fn game_loop<R: Rng>(ctx: &mut Context, game: &mut SnakeGame<R>) -> Result<()> {
    game.draw(&mut ctx.term)?;

    loop {
        ctx.clock.tick(ctx.speed);

        let mut turns = vec![];
        for key_ev in ctx.term.read_key_events_queue()? {
            match map_key(&key_ev) {
                Some(Input::Quit) => {
                    log::info!("quit requested");
                    return Ok(());
                }
                Some(Input::Turn(dir)) => turns.push(dir),
                None => {}
            }
        }

        let outcome = game.tick(&turns);
        log::trace!(
            "tick: {:?}, head at {:?}, apple at {:?}",
            outcome,
            game.snake().head_position(),
            game.apple().position()
        );

        game.draw(&mut ctx.term)?;
    }
}

fn map_key(ev: &KeyEvent) -> Option<Input> {
    match ev {
        ev if is_ctrl_c(ev) => Some(Input::Quit),
        KeyEvent { code, modifiers: _ } => match code {
            KeyCode::Char('w') | KeyCode::Up => Some(Input::Turn(Up)),
            KeyCode::Char('a') | KeyCode::Left => Some(Input::Turn(Left)),
            KeyCode::Char('s') | KeyCode::Down => Some(Input::Turn(Down)),
            KeyCode::Char('d') | KeyCode::Right => Some(Input::Turn(Right)),
            KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
            _ => None,
        }
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
