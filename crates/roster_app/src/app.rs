use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use chrono::Local;
use log::LevelFilter;
use roster_core::{update, Effect, ItemId, ItemRef, ListState, ListViewModel, Msg};
use roster_logging::{roster_error, roster_info, roster_warn};

use crate::{load_config, render_table, save_config, Args, EffectRunner, DEFAULT_CONFIG_FILE};

/// Owns the list state and the local edits requested on the command line.
#[derive(Debug, Default)]
pub struct Session {
    state: ListState,
    removals: Vec<ItemId>,
    selection: Vec<ItemId>,
}

impl Session {
    pub fn new(state: ListState, removals: Vec<ItemId>, selection: Vec<ItemId>) -> Self {
        Self {
            state,
            removals,
            selection,
        }
    }

    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        effects
    }

    /// Replays the local removals and selection on freshly loaded data.
    pub fn apply_local_edits(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        for id in self.removals.clone() {
            effects.extend(self.dispatch(Msg::Remove(ItemRef::Id(id))));
        }
        if !self.selection.is_empty() {
            effects.extend(self.dispatch(Msg::SelectionChanged(self.selection.clone())));
        }
        effects
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn view(&self) -> ListViewModel {
        self.state.view()
    }
}

pub fn run(args: Args) -> anyhow::Result<ExitCode> {
    let (path, required) = match &args.config {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    let mut config = load_config(&path, required).context("loading configuration")?;
    config.apply_args(&args);

    if args.write_config {
        save_config(&path, &config).context("writing configuration")?;
        println!("Wrote {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if !roster_logging::initialize(config.log.into(), level) {
        eprintln!("Warning: logging is disabled");
    }
    roster_info!(
        "Starting roster base_url={} owner_id={} filter={:?}",
        config.base_url,
        config.owner_id,
        config.filter
    );

    // Each awaited response gets its own budget: connect + request timeout plus slack.
    let wait_limit = Duration::from_millis(config.connect_timeout_ms + config.request_timeout_ms)
        + Duration::from_secs(5);
    let runner = EffectRunner::new(config.source_settings());
    let mut session = Session::new(
        ListState::new(config.owner_id, config.filter.into()),
        args.remove.clone(),
        args.select.clone(),
    );

    loop {
        let outcome = run_cycle(&mut session, &runner, wait_limit);
        match args.watch {
            Some(secs) => thread::sleep(Duration::from_secs(secs.max(1))),
            None if outcome == CycleOutcome::Synced => return Ok(ExitCode::SUCCESS),
            None => return Ok(ExitCode::FAILURE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CycleOutcome {
    Synced,
    Failed,
    /// The backend did not answer within the per-response wait limit.
    TimedOut,
}

/// One reload, rendered to stdout.
fn run_cycle(session: &mut Session, runner: &EffectRunner, wait_limit: Duration) -> CycleOutcome {
    let outcome = sync_cycle(session, runner, wait_limit);

    let view = session.view();
    if let Some(error) = &view.error {
        roster_warn!("Cycle finished with error: {}", error);
    }
    println!("Fetched at {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    print!("{}", render_table(&view));
    if outcome == CycleOutcome::TimedOut {
        roster_error!("No response from backend within {:?}", wait_limit);
        println!("error: no response from backend within {:?}", wait_limit);
    }
    outcome
}

/// Reloads and waits until a view is emitted or an error is stored.
///
/// `wait_limit` bounds each awaited response, not the whole cycle, since the
/// items and memberships fetches run one after the other.
fn sync_cycle(session: &mut Session, runner: &EffectRunner, wait_limit: Duration) -> CycleOutcome {
    let mut emitted = runner.enqueue(session.dispatch(Msg::Reload));

    while emitted.is_none() && session.state().error().is_none() {
        let Some(msg) = runner.next_msg(wait_limit) else {
            return CycleOutcome::TimedOut;
        };
        emitted = runner.enqueue(session.dispatch(msg));
    }

    // Also covers a failed memberships fetch, where the base collection is still shown.
    if session.state().is_loaded() {
        runner.enqueue(session.apply_local_edits());
    }

    if session.state().error().is_none() {
        CycleOutcome::Synced
    } else {
        CycleOutcome::Failed
    }
}
