use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use async_trait::async_trait;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    prelude::Frame,
    widgets::Clear,
    Terminal,
};
use tracing::{debug, info};

use crate::clipboard::{ClipboardSink, Osc52Clipboard};
use crate::crypto::KeySize;
use crate::defaults::Defaults;
use crate::screens::{ConfirmQuitScreen, KeygenScreen};
use crate::ui::common_nav::is_quit_chord;
use crate::ui::components::draw_toast;

pub enum Transition {
    Stay,
    Push(Box<dyn ScreenWidget>),
    Pop,
    Replace(Box<dyn ScreenWidget>),
    Quit,
}

pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

/// State shared by every screen.
pub struct AppCtx {
    pub toast: Option<Toast>,
    pub clipboard: Box<dyn ClipboardSink + Send>,
}

impl AppCtx {
    pub fn new(clipboard: Box<dyn ClipboardSink + Send>) -> Self {
        Self { toast: None, clipboard }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + Defaults::TOAST_DURATION,
        });
    }

    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
        }
    }

    pub fn toast_message(&self) -> Option<&str> {
        self.toast.as_ref().map(|t| t.message.as_str())
    }
}

#[async_trait]
pub trait ScreenWidget: Send {
    fn title(&self) -> &str { "" }
    fn draw(&self, f: &mut Frame<'_>, area: Rect, ctx: &AppCtx);

    /// Called once per loop iteration while this screen is on top, whether or not
    /// a key was pressed. Use it to pick up finished background work.
    fn tick(&mut self, _ctx: &mut AppCtx) -> Transition { Transition::Stay }

    async fn on_key(&mut self, key: KeyEvent, ctx: &mut AppCtx) -> Result<Transition>;
}

/// Launch options for the interactive page.
pub struct AppConfig {
    pub key_size: KeySize,
    pub out_dir: PathBuf,
}

/// Apply a transition to the screen stack. Returns `false` when the app should exit.
pub fn apply_transition(stack: &mut Vec<Box<dyn ScreenWidget>>, t: Transition) -> bool {
    match t {
        Transition::Stay => {}
        Transition::Push(s) => {
            debug!(screen = s.title(), "push");
            stack.push(s);
        }
        Transition::Pop => {
            stack.pop();
        }
        Transition::Replace(s) => {
            stack.pop();
            stack.push(s);
        }
        Transition::Quit => return false,
    }
    !stack.is_empty()
}

/// Drive `fut` on a fresh multi-thread runtime, then shut the runtime down without
/// waiting for blocking jobs still in flight (an abandoned key generation).
pub fn block_on<F: Future>(fut: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let output = runtime.block_on(fut);
    runtime.shutdown_background();
    Ok(output)
}

pub async fn run(config: AppConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let ctx = AppCtx::new(Box::new(Osc52Clipboard::new(io::stdout())));
    info!(bits = config.key_size.bits(), out_dir = %config.out_dir.display(), "starting key generator");
    let result = event_loop(&mut terminal, ctx, config).await;

    // restore even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    mut ctx: AppCtx,
    config: AppConfig,
) -> Result<()> {
    let mut stack: Vec<Box<dyn ScreenWidget>> =
        vec![Box::new(KeygenScreen::new(config.key_size, &config.out_dir))];

    loop {
        ctx.expire_toast(Instant::now());

        if let Some(top) = stack.last_mut() {
            let t = top.tick(&mut ctx);
            if !apply_transition(&mut stack, t) {
                break;
            }
        }

        terminal.draw(|f| {
            let size = f.size();
            if let Some(top) = stack.last() {
                top.draw(f, size, &ctx);
            } else {
                f.render_widget(Clear, size);
            }
            if let Some(msg) = ctx.toast_message() {
                draw_toast(f, size, msg);
            }
        })?;

        if !event::poll(Defaults::TICK)? {
            continue;
        }
        if let Event::Key(k) = event::read()? {
            if k.kind != KeyEventKind::Press {
                continue;
            }
            if is_quit_chord(&k) {
                stack.push(Box::new(ConfirmQuitScreen::new()));
                continue;
            }
            if let Some(top) = stack.last_mut() {
                let t = top.on_key(k, &mut ctx).await?;
                if !apply_transition(&mut stack, t) {
                    break;
                }
            }
        }
    }

    info!("key generator closed");
    Ok(())
}
