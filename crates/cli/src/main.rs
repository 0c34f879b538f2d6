use std::process::ExitCode;

use indexmap::IndexMap;
use log::debug;

use consign_cli::console::Console;
use consign_cli::output::TermOutput;
use consign_core::command::{Command, Interceptor, Middleware};
use consign_core::error::{Abort, Result};
use consign_core::output::{LogLogger, Output, Row};
use consign_core::params::Params;

/// `greet {name} {--loud}`
struct Greet {
    output: TermOutput,
}

impl Command for Greet {
    fn signature(&self) -> String {
        "greet {name:Who to greet} {--loud}".to_string()
    }

    fn description(&self) -> String {
        "Greet someone by name".to_string()
    }

    fn handle(&self, params: &mut Params) -> Result<i32, Abort> {
        let name = params.get("name", "world");
        let mut greeting = format!("Hello, {name}!");

        if !params.get("loud", "").is_empty() {
            greeting = greeting.to_uppercase();
        }

        self.output.success(&greeting);
        Ok(0)
    }
}

/// Fills in a missing `target` from `source` before the handler runs.
struct DeriveTarget;

impl Middleware for DeriveTarget {
    fn process(&self, params: &mut Params) -> Result<(), Abort> {
        if params.get("target", "").is_empty() {
            let source = params.get("source", "");
            debug!("No target given, deriving one from `{source}`");
            params.set("target", format!("{source}-mirror"));
        }

        Ok(())
    }
}

/// Reports the finished invocation after the handler ran.
struct SyncSummary {
    output: TermOutput,
}

impl Interceptor for SyncSummary {
    fn process(&self, params: &Params, exit_code: i32) {
        let target = params.get("target", "?");
        self.output
            .info(&format!("Sync to `{target}` finished with code {exit_code}"));
    }
}

/// `sync:items {source} {target?} {--dry-run} {--batch=10}`
struct SyncItems {
    output: TermOutput,
}

impl Command for SyncItems {
    fn signature(&self) -> String {
        "sync:items {source:Where to read from} {target?:Where to write to} \
         {--dry-run} {--batch=10:Batch size}"
            .to_string()
    }

    fn description(&self) -> String {
        "Sync items from a source to a target".to_string()
    }

    fn middleware(&self, _params: &Params) -> Vec<Box<dyn Middleware>> {
        vec![Box::new(DeriveTarget)]
    }

    fn handle(&self, params: &mut Params) -> Result<i32, Abort> {
        let source = params.get("source", "");
        let target = params.get("target", "");
        let batch = params.get("batch", "10");

        if source == target {
            return Err(Abort::new(format!(
                "Source and target are both `{source}`; nothing to sync."
            )));
        }

        let mut row: Row = IndexMap::new();
        row.insert("source".to_string(), source);
        row.insert("target".to_string(), target);
        row.insert("batch".to_string(), batch);
        self.output.table(&[row], None);

        if !params.get("dry-run", "").is_empty() {
            self.output.warning("Dry run, nothing copied.");
        }

        Ok(0)
    }

    fn interceptors(&self, _params: &Params) -> Vec<Box<dyn Interceptor>> {
        vec![Box::new(SyncSummary {
            output: TermOutput::new(),
        })]
    }
}

fn execute() -> Result<i32> {
    let mut console = Console::new("consign", Box::new(TermOutput::new()), Box::new(LogLogger));

    console.register_command(|| {
        Box::new(Greet {
            output: TermOutput::new(),
        })
    })?;
    console.register_command(|| {
        Box::new(SyncItems {
            output: TermOutput::new(),
        })
    })?;

    console.run()
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
