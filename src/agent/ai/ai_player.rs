//! AiPlayer - the engine as a game participant
//!
//! An `AiPlayer` keeps its own copy of the game position, mirrors the moves
//! played in the game into it and searches that private board when asked for
//! a move. The game never shares its board with the search.
//!
//! # Threading
//!
//! With `use_threading` the whole iterative-deepening loop runs on a worker
//! thread and the result is delivered once, through a callback or a channel.
//! Time-bounded settings (`use_fixed_depth_search == false`) start a timer
//! thread that aborts the search after `search_time_millis`; the search then
//! reports the best move of its last completed iteration.
//!
//! ```no_run
//! use chess_ai::agent::ai::{AiPlayer, Difficulty};
//!
//! let mut ai = AiPlayer::new(Difficulty::Medium.settings());
//! let result = ai.choose_move();
//! if let Some(mv) = result.best_move {
//!     ai.notify_move_made(mv);
//! }
//! ```

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, warn};

use crate::game_repr::{Move, Position};

use super::search::{AbortHandle, Search, SearchResult};
use super::settings::AiSettings;

pub struct AiPlayer {
    board: Position,
    settings: AiSettings,
    /// None while a worker thread owns the search
    search: Option<Search>,
    worker: Option<JoinHandle<Search>>,
    /// Abort flag of the running (or most recent) search
    abort: AbortHandle,
}

impl AiPlayer {
    /// A player for the standard starting position.
    pub fn new(settings: AiSettings) -> Self {
        Self::with_position(Position::start_position(), settings)
    }

    pub fn with_position(board: Position, settings: AiSettings) -> Self {
        let search = Search::new(settings.clone());
        let abort = search.abort_handle();
        Self {
            board,
            settings,
            search: Some(search),
            worker: None,
            abort,
        }
    }

    /// The player's private copy of the game position
    pub fn board(&self) -> &Position {
        &self.board
    }

    pub fn settings(&self) -> &AiSettings {
        &self.settings
    }

    /// Takes effect from the next search.
    pub fn set_settings(&mut self, settings: AiSettings) {
        self.settings = settings;
    }

    /// Mirror a move played in the game.
    ///
    /// The move must be legal in the player's current position. A search
    /// already running keeps working on its own snapshot.
    pub fn notify_move_made(&mut self, mv: Move) {
        self.board.make_move(mv, false);
    }

    /// Replace the private board, e.g. after a new game or an undo.
    pub fn set_position(&mut self, board: Position) {
        self.board = board;
    }

    /// True while a worker thread is searching
    pub fn is_searching(&self) -> bool {
        self.worker.as_ref().is_some_and(|worker| !worker.is_finished())
    }

    /// Stop the running search; it still reports its last completed iteration.
    pub fn abort_search(&self) {
        debug!("abort requested");
        self.abort.abort();
    }

    /// Search the current position and hand the result to `on_complete`.
    ///
    /// With `use_threading` this returns immediately and `on_complete` runs on
    /// the worker thread; otherwise the search runs on the calling thread. A
    /// search still running from an earlier call is aborted first.
    pub fn start_search<F>(&mut self, on_complete: F)
    where
        F: FnOnce(SearchResult) + Send + 'static,
    {
        let mut search = self.take_search();
        search.set_settings(self.settings.clone());
        self.abort = search.abort_handle();
        let timer = self.start_timer();

        if self.settings.use_threading {
            let mut board = self.board.clone();
            self.worker = Some(thread::spawn(move || {
                let result = search.start_search(&mut board);
                SearchTimer::stop(timer);
                on_complete(result);
                search
            }));
        } else {
            let result = search.start_search(&mut self.board);
            SearchTimer::stop(timer);
            self.search = Some(search);
            on_complete(result);
        }
    }

    /// Like [`AiPlayer::start_search`], delivering the result on a channel.
    pub fn search_async(&mut self) -> Receiver<SearchResult> {
        let (tx, rx) = mpsc::channel();
        self.start_search(move |result| {
            // The receiver may have been dropped by a caller that lost interest
            let _ = tx.send(result);
        });
        rx
    }

    /// Search on the calling thread and return the result, whatever
    /// `use_threading` says. Time-bounded settings still stop on the timer.
    pub fn choose_move(&mut self) -> SearchResult {
        let mut search = self.take_search();
        search.set_settings(self.settings.clone());
        self.abort = search.abort_handle();
        let timer = self.start_timer();

        let result = search.start_search(&mut self.board);
        SearchTimer::stop(timer);
        self.search = Some(search);
        result
    }

    /// Time-bounded settings get a timer thread that fires the abort flag.
    fn start_timer(&self) -> Option<SearchTimer> {
        if self.settings.use_fixed_depth_search {
            return None;
        }
        Some(SearchTimer::start(
            self.abort.clone(),
            Duration::from_millis(self.settings.search_time_millis),
        ))
    }

    /// Get the search back from a finished (or aborted) worker.
    fn take_search(&mut self) -> Search {
        if let Some(search) = self.search.take() {
            return search;
        }
        if let Some(worker) = self.worker.take() {
            self.abort.abort();
            match worker.join() {
                Ok(search) => return search,
                Err(_) => warn!("search thread panicked, starting with a fresh search"),
            }
        }
        Search::new(self.settings.clone())
    }
}

/// Aborts a search once its time is up. Stopping the timer wakes the
/// thread right away, so a search that ends early leaves nothing sleeping.
struct SearchTimer {
    cancel: Sender<()>,
    thread: JoinHandle<bool>,
}

impl SearchTimer {
    fn start(abort: AbortHandle, limit: Duration) -> Self {
        let (cancel, cancelled) = mpsc::channel::<()>();
        let thread = thread::spawn(move || match cancelled.recv_timeout(limit) {
            Err(RecvTimeoutError::Timeout) => {
                debug!("search time of {limit:?} used up");
                abort.abort();
                true
            }
            _ => false,
        });
        Self { cancel, thread }
    }

    /// Cancel the timer and wait for its thread. True if it had already fired.
    fn stop(timer: Option<Self>) -> bool {
        let Some(SearchTimer { cancel, thread }) = timer else {
            return false;
        };
        drop(cancel);
        thread.join().unwrap_or(false)
    }
}

impl Drop for AiPlayer {
    fn drop(&mut self) {
        self.abort.abort();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
