#![forbid(unsafe_code)]

//! Message-driven runtime.
//!
//! The composition shell is a [`Model`]: messages go in, commands come out,
//! and the view is redrawn into a [`Scene`] after every update. Side
//! effects (data fetches) run as [`Cmd::Task`] closures on background
//! threads; their results come back through the program's single channel,
//! so the model itself never blocks and never touches a thread primitive.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use vizgrid_scene::Scene;

/// An effect requested by an update.
pub enum Cmd<M> {
    /// Nothing to do.
    None,
    /// Stop the program loop.
    Quit,
    /// Run several commands.
    Batch(Vec<Cmd<M>>),
    /// Feed a message straight back into the loop.
    Msg(M),
    /// Deliver a message after a delay.
    Tick(Duration, M),
    /// Run a blocking closure on a background thread; its return value is
    /// delivered as a message.
    Task(Box<dyn FnOnce() -> M + Send>),
}

impl<M> Cmd<M> {
    pub fn none() -> Self {
        Self::None
    }

    pub fn quit() -> Self {
        Self::Quit
    }

    pub fn batch(cmds: impl IntoIterator<Item = Cmd<M>>) -> Self {
        Self::Batch(cmds.into_iter().collect())
    }

    pub fn msg(msg: M) -> Self {
        Self::Msg(msg)
    }

    pub fn tick(after: Duration, msg: M) -> Self {
        Self::Tick(after, msg)
    }

    pub fn task(f: impl FnOnce() -> M + Send + 'static) -> Self {
        Self::Task(Box::new(f))
    }
}

impl<M> fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("Cmd::None"),
            Self::Quit => f.write_str("Cmd::Quit"),
            Self::Batch(cmds) => write!(f, "Cmd::Batch(len={})", cmds.len()),
            Self::Msg(_) => f.write_str("Cmd::Msg"),
            Self::Tick(after, _) => write!(f, "Cmd::Tick({after:?})"),
            Self::Task(_) => f.write_str("Cmd::Task"),
        }
    }
}

/// The application seam: state in, commands out, scene redrawn per update.
pub trait Model {
    type Message: Send + 'static;

    /// Commands to run at startup.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Handle one message, mutating state and requesting effects.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Redraw the full scene from current state.
    fn view(&self, scene: &mut Scene);
}

/// Drives a [`Model`]: routes messages, spawns task threads, and keeps the
/// scene current after every update.
pub struct Program<M: Model> {
    model: M,
    scene: Scene,
    tx: Sender<M::Message>,
    rx: Receiver<M::Message>,
    /// Outstanding background tasks and ticks.
    pending: Arc<AtomicUsize>,
    quit: bool,
}

impl<M: Model> Program<M> {
    pub fn new(model: M) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            model,
            scene: Scene::new(),
            tx,
            rx,
            pending: Arc::new(AtomicUsize::new(0)),
            quit: false,
        }
    }

    /// Run the model's init commands and draw the first frame.
    pub fn start(&mut self) {
        let cmd = self.model.init();
        self.execute(cmd);
        self.redraw();
    }

    /// Feed one message through update, execute the resulting commands, and
    /// redraw.
    pub fn process(&mut self, msg: M::Message) {
        trace!("processing message");
        let cmd = self.model.update(msg);
        self.execute(cmd);
        self.redraw();
    }

    /// Drain messages until the channel stays empty with no pending
    /// background work, or the timeout elapses. Returns the number of
    /// messages processed.
    pub fn run_until_settled(&mut self, timeout: Duration) -> usize {
        let deadline = Instant::now() + timeout;
        let mut processed = 0;
        loop {
            if self.quit {
                break;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining.min(Duration::from_millis(10))) {
                Ok(msg) => {
                    self.process(msg);
                    processed += 1;
                }
                Err(RecvTimeoutError::Timeout) => {
                    if self.pending.load(Ordering::SeqCst) == 0 || Instant::now() >= deadline {
                        break;
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        processed
    }

    /// The last drawn scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// A sender for injecting messages from outside the loop.
    pub fn sender(&self) -> Sender<M::Message> {
        self.tx.clone()
    }

    fn redraw(&mut self) {
        self.scene.clear();
        self.model.view(&mut self.scene);
    }

    fn execute(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.quit = true,
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd);
                }
            }
            Cmd::Msg(msg) => {
                // Re-entrant dispatch keeps ordering: the follow-up message
                // runs before anything queued behind it.
                let cmd = self.model.update(msg);
                self.execute(cmd);
            }
            Cmd::Tick(after, msg) => {
                debug!(?after, "scheduling tick");
                let tx = self.tx.clone();
                let pending = Arc::clone(&self.pending);
                pending.fetch_add(1, Ordering::SeqCst);
                thread::spawn(move || {
                    thread::sleep(after);
                    let _ = tx.send(msg);
                    pending.fetch_sub(1, Ordering::SeqCst);
                });
            }
            Cmd::Task(f) => {
                debug!("spawning task");
                let tx = self.tx.clone();
                let pending = Arc::clone(&self.pending);
                pending.fetch_add(1, Ordering::SeqCst);
                thread::spawn(move || {
                    let msg = f();
                    let _ = tx.send(msg);
                    pending.fetch_sub(1, Ordering::SeqCst);
                });
            }
        }
    }
}
