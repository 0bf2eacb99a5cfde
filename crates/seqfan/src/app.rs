//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::Result;

use seqfan_core::{sink, LineSink, RunConfig};
use seqfan_orchestration::{orchestrator, planning};

use crate::config::AppConfig;
use crate::launcher::SelfExecLauncher;
use crate::{child, completion};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let run_config = RunConfig::new(config.iterations, config.delay_us)?;

    // Child mode: this process is one task's isolated execution context.
    if let Some(kind) = config.child {
        let sink = sink::stdout();
        child::run(kind, config.task_id, run_config, &sink);
        return Ok(());
    }

    run_harness(run_config)
}

fn run_harness(config: RunConfig) -> Result<()> {
    let descriptors = planning::plan(config);
    let launcher = Arc::new(SelfExecLauncher::discover()?);
    let sink: Arc<dyn LineSink> = Arc::new(sink::stdout());
    orchestrator::run_all(&descriptors, launcher, sink)?;
    Ok(())
}
