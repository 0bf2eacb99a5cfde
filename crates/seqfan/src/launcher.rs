//! Child launcher that re-executes the harness binary.

use std::io;
use std::path::PathBuf;
use std::process::{Child, Command};

use seqfan_core::HarnessError;
use seqfan_orchestration::{ChildLauncher, TaskDescriptor};

/// Launches children by re-executing the current binary in child mode.
///
/// The child inherits stdout, so its header and term lines land on the
/// same stream as the parent's, one whole line at a time.
pub struct SelfExecLauncher {
    exe: PathBuf,
}

impl SelfExecLauncher {
    /// Locate the running executable.
    pub fn discover() -> Result<Self, HarnessError> {
        let exe = std::env::current_exe().map_err(HarnessError::ExeDiscovery)?;
        Ok(Self { exe })
    }

    /// Use an explicit executable path instead of self-discovery.
    #[must_use]
    pub fn with_executable(exe: PathBuf) -> Self {
        Self { exe }
    }
}

impl ChildLauncher for SelfExecLauncher {
    fn launch(&self, descriptor: &TaskDescriptor) -> io::Result<Child> {
        #[allow(clippy::cast_possible_truncation)]
        let delay_us = descriptor.config.step_delay.as_micros() as u64;
        Command::new(&self.exe)
            .arg(descriptor.config.iterations.to_string())
            .arg(delay_us.to_string())
            .arg("--child")
            .arg(descriptor.kind.tag())
            .arg("--task-id")
            .arg(descriptor.task_id.to_string())
            .spawn()
    }
}
