//! `submit-task` and `delete-task` commands.

use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::sync::Arc;

use super::args::single_argument;
use super::TaskCommand;
use crate::context::ServiceContext;
use crate::ports::filesystem::FileSystem;
use crate::ports::task_runner::{SubmitTaskError, TaskRunner};
use crate::ports::terminal::{Style, StyledLine, TerminalUi};

/// Builds the task commands around a task runner and a terminal.
pub struct TaskRunnerCommandFactory {
    task_runner: Arc<dyn TaskRunner>,
    fs: Arc<dyn FileSystem>,
    ui: Arc<dyn TerminalUi>,
}

impl TaskRunnerCommandFactory {
    /// Creates a factory for the given ports.
    #[must_use]
    pub fn new(
        task_runner: Arc<dyn TaskRunner>,
        fs: Arc<dyn FileSystem>,
        ui: Arc<dyn TerminalUi>,
    ) -> Self {
        Self {
            task_runner,
            fs,
            ui,
        }
    }

    /// Creates a factory sharing the ports of a service context.
    #[must_use]
    pub fn from_context(ctx: &ServiceContext) -> Self {
        Self::new(
            Arc::clone(&ctx.task_runner),
            Arc::clone(&ctx.fs),
            Arc::clone(&ctx.ui),
        )
    }

    /// Makes the `submit-task PATH_TO_JSON` command.
    #[must_use]
    pub fn make_submit_task_command(&self) -> TaskCommand {
        let task_runner = Arc::clone(&self.task_runner);
        let fs = Arc::clone(&self.fs);
        let ui = Arc::clone(&self.ui);

        TaskCommand::new(
            "submit-task",
            "st",
            "Submit a task from a JSON file",
            move |args| submit_task(task_runner.as_ref(), fs.as_ref(), ui.as_ref(), args),
        )
    }

    /// Makes the `delete-task TASK_GUID` command.
    #[must_use]
    pub fn make_delete_task_command(&self) -> TaskCommand {
        let task_runner = Arc::clone(&self.task_runner);
        let ui = Arc::clone(&self.ui);

        TaskCommand::new(
            "delete-task",
            "dt",
            "Delete a completed task",
            move |args| delete_task(task_runner.as_ref(), ui.as_ref(), args),
        )
    }
}

fn submit_task(
    task_runner: &dyn TaskRunner,
    fs: &dyn FileSystem,
    ui: &dyn TerminalUi,
    args: &[OsString],
) {
    let Some(path) = single_argument(args).map(Path::new) else {
        tracing::debug!(count = args.len(), "submit-task: invalid arguments");
        ui.say_line(StyledLine::styled(Style::Alert, "Path to JSON is required"));
        return;
    };

    let payload = match fs.read(path) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "submit-task: unreadable file");
            ui.say_line(StyledLine::styled(Style::Alert, format!("Error reading file: {e}")));
            return;
        }
    };

    tracing::debug!(path = %path.display(), bytes = payload.len(), "submit-task: submitting");
    match task_runner.submit_task(&payload) {
        Ok(task_name) => ui.say_line(submitted(&task_name)),
        Err(e) => ui.say_line(submit_failed(&e)),
    }
}

fn delete_task(task_runner: &dyn TaskRunner, ui: &dyn TerminalUi, args: &[OsString]) {
    let Some(task_guid) = single_argument(args).and_then(OsStr::to_str) else {
        tracing::debug!(count = args.len(), "delete-task: invalid arguments");
        ui.say_line(StyledLine::styled(Style::Alert, "Please input a valid TASK_GUID"));
        return;
    };

    tracing::debug!(task_guid, "delete-task: deleting");
    match task_runner.delete_task(task_guid) {
        Ok(()) => ui.say_line(StyledLine::styled(Style::Affirmative, "OK")),
        Err(e) => {
            let [heading, reason] = delete_failed(task_guid, &e.to_string());
            ui.say_line(heading);
            ui.say_line(reason);
        }
    }
}

fn submitted(task_name: &str) -> StyledLine {
    StyledLine::styled(
        Style::Affirmative,
        format!("Successfully submitted {task_name}"),
    )
}

fn submit_failed(err: &SubmitTaskError) -> StyledLine {
    StyledLine::styled(
        Style::Alert,
        format!("Error submitting {}: {err}", err.task_name),
    )
}

// "Failiure" is the established output text; scripts match on it.
fn delete_failed(task_guid: &str, reason: &str) -> [StyledLine; 2] {
    [
        StyledLine::new()
            .push(Style::Neutral, "Error Deleting the task ")
            .push(Style::Emphasis, task_guid),
        StyledLine::new()
            .push(Style::Neutral, "Failiure Reason :")
            .push(Style::Alert, reason),
    ]
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Mutex;

    use super::*;
    use crate::adapters::buffer::BufferUi;
    use crate::adapters::live::filesystem::LiveFileSystem;
    use crate::ports::task_runner::PortError;
    use crate::ports::terminal::Span;

    /// Records calls and hands back canned results.
    #[derive(Default)]
    struct FakeTaskRunner {
        submit_calls: Mutex<Vec<Vec<u8>>>,
        submit_returns: Mutex<(String, Option<String>)>,
        delete_calls: Mutex<Vec<String>>,
        delete_returns: Mutex<Option<String>>,
    }

    impl FakeTaskRunner {
        fn submit_task_returns(&self, task_name: &str, err: Option<&str>) {
            *self.submit_returns.lock().unwrap() =
                (task_name.to_string(), err.map(str::to_string));
        }

        fn delete_task_returns(&self, err: Option<&str>) {
            *self.delete_returns.lock().unwrap() = err.map(str::to_string);
        }

        fn submit_task_call_count(&self) -> usize {
            self.submit_calls.lock().unwrap().len()
        }

        fn submit_task_args_for_call(&self, i: usize) -> Vec<u8> {
            self.submit_calls.lock().unwrap()[i].clone()
        }

        fn delete_task_calls(&self) -> Vec<String> {
            self.delete_calls.lock().unwrap().clone()
        }
    }

    impl TaskRunner for FakeTaskRunner {
        fn submit_task(&self, payload: &[u8]) -> Result<String, SubmitTaskError> {
            self.submit_calls.lock().unwrap().push(payload.to_vec());
            let (task_name, err) = self.submit_returns.lock().unwrap().clone();
            match err {
                None => Ok(task_name),
                Some(reason) => Err(SubmitTaskError::new(task_name, reason)),
            }
        }

        fn delete_task(&self, task_guid: &str) -> Result<(), PortError> {
            self.delete_calls.lock().unwrap().push(task_guid.to_string());
            match self.delete_returns.lock().unwrap().clone() {
                None => Ok(()),
                Some(reason) => Err(reason.into()),
            }
        }
    }

    struct Harness {
        task_runner: Arc<FakeTaskRunner>,
        ui: Arc<BufferUi>,
        factory: TaskRunnerCommandFactory,
    }

    fn harness() -> Harness {
        let task_runner = Arc::new(FakeTaskRunner::default());
        let ui = Arc::new(BufferUi::new());
        let factory = TaskRunnerCommandFactory::new(
            Arc::clone(&task_runner) as Arc<dyn TaskRunner>,
            Arc::new(LiveFileSystem),
            Arc::clone(&ui) as Arc<dyn TerminalUi>,
        );
        Harness {
            task_runner,
            ui,
            factory,
        }
    }

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    fn write_temp_json(name: &str, contents: &[u8]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ltc_submit_task_{name}"));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("tmp_json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn span(style: Style, text: &str) -> Span {
        Span {
            style,
            text: text.to_string(),
        }
    }

    #[test]
    fn submits_a_task_from_json() {
        let h = harness();
        let json = br#"{"Value":"test value"}"#;
        let path = write_temp_json("success", json);
        h.task_runner.submit_task_returns("some-task", None);
        let submit = h.factory.make_submit_task_command();

        submit.run(&args(&[path.to_str().unwrap()]));

        assert_eq!(h.ui.contents(), "Successfully submitted some-task\n");
        assert_eq!(
            h.ui.lines()[0].spans(),
            [span(Style::Affirmative, "Successfully submitted some-task")]
        );
        assert_eq!(h.task_runner.submit_task_call_count(), 1);
        assert_eq!(h.task_runner.submit_task_args_for_call(0), json.to_vec());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn prints_an_error_returned_by_the_task_runner() {
        let h = harness();
        let json = br#"{"Value":"test value"}"#;
        let path = write_temp_json("runner_error", json);
        h.task_runner.submit_task_returns("some-task", Some("taskypoo"));
        let submit = h.factory.make_submit_task_command();

        submit.run(&args(&[path.to_str().unwrap()]));

        assert_eq!(h.task_runner.submit_task_call_count(), 1);
        assert_eq!(h.task_runner.submit_task_args_for_call(0), json.to_vec());
        assert_eq!(h.ui.contents(), "Error submitting some-task: taskypoo\n");

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn submit_error_without_task_name_keeps_format() {
        let h = harness();
        let path = write_temp_json("unnamed_error", b"not json");
        h.task_runner.submit_task_returns("", Some("expected value at line 1 column 1"));
        let submit = h.factory.make_submit_task_command();

        submit.run(&args(&[path.to_str().unwrap()]));

        assert_eq!(
            h.ui.contents(),
            "Error submitting : expected value at line 1 column 1\n"
        );

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn submit_requires_a_path() {
        let h = harness();

        h.factory.make_submit_task_command().run(&[]);

        assert_eq!(h.ui.contents(), "Path to JSON is required\n");
        assert_eq!(h.task_runner.submit_task_call_count(), 0);
    }

    #[test]
    fn submit_rejects_extra_arguments() {
        let h = harness();

        let submit = h.factory.make_submit_task_command();
        submit.run(&args(&["a.json", "b.json"]));

        assert_eq!(h.ui.contents(), "Path to JSON is required\n");
        assert_eq!(h.task_runner.submit_task_call_count(), 0);
    }

    #[test]
    fn submit_reports_unreadable_file() {
        let h = harness();
        let path = std::env::temp_dir()
            .join("ltc_submit_task_missing")
            .join("file-no-existy");
        let submit = h.factory.make_submit_task_command();

        submit.run(&args(&[path.to_str().unwrap()]));

        assert_eq!(
            h.ui.contents(),
            format!(
                "Error reading file: open {}: no such file or directory\n",
                path.display()
            )
        );
        assert_eq!(h.task_runner.submit_task_call_count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn submit_reads_non_utf8_path_verbatim() {
        use std::os::unix::ffi::OsStrExt;

        let h = harness();
        let dir = std::env::temp_dir().join("ltc_submit_task_non_utf8");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(OsStr::from_bytes(b"t\xff.json"));
        std::fs::write(&path, br#"{"task_guid":"g"}"#).unwrap();
        h.task_runner.submit_task_returns("g", None);

        let submit = h.factory.make_submit_task_command();

        submit.run(&[path.into_os_string()]);

        assert_eq!(h.ui.contents(), "Successfully submitted g\n");
        assert_eq!(
            h.task_runner.submit_task_args_for_call(0),
            br#"{"task_guid":"g"}"#
        );

        let _ = std::fs::remove_dir_all(dir);
    }

    #[cfg(unix)]
    #[test]
    fn delete_rejects_non_utf8_guid() {
        use std::os::unix::ffi::OsStrExt;

        let h = harness();

        let guid = OsStr::from_bytes(b"g\xff").to_os_string();

        h.factory.make_delete_task_command().run(&[guid]);

        assert_eq!(h.ui.contents(), "Please input a valid TASK_GUID\n");
        assert!(h.task_runner.delete_task_calls().is_empty());
    }

    #[test]
    fn deletes_the_given_task() {
        let h = harness();
        h.task_runner.delete_task_returns(None);
        let delete = h.factory.make_delete_task_command();

        delete.run(&args(&["task-guid-1"]));

        assert_eq!(h.task_runner.delete_task_calls(), ["task-guid-1"]);
        assert_eq!(h.ui.lines().len(), 1);
        assert_eq!(h.ui.lines()[0].spans(), [span(Style::Affirmative, "OK")]);
    }

    #[test]
    fn reports_error_while_deleting_the_task() {
        let h = harness();
        h.task_runner.delete_task_returns(Some("task in unknown state"));
        let delete = h.factory.make_delete_task_command();

        delete.run(&args(&["task-guid-1"]));

        assert_eq!(
            h.ui.contents(),
            "Error Deleting the task task-guid-1\nFailiure Reason :task in unknown state\n"
        );
        let lines = h.ui.lines();
        assert_eq!(
            lines[0].spans(),
            [
                span(Style::Neutral, "Error Deleting the task "),
                span(Style::Emphasis, "task-guid-1"),
            ]
        );
        assert_eq!(
            lines[1].spans(),
            [
                span(Style::Neutral, "Failiure Reason :"),
                span(Style::Alert, "task in unknown state"),
            ]
        );
    }

    #[test]
    fn delete_fails_with_usage() {
        let h = harness();

        h.factory.make_delete_task_command().run(&[]);

        assert_eq!(h.ui.contents(), "Please input a valid TASK_GUID\n");
        assert!(h.task_runner.delete_task_calls().is_empty());
    }

    #[test]
    fn delete_rejects_empty_guid() {
        let h = harness();

        h.factory.make_delete_task_command().run(&args(&[""]));

        assert_eq!(h.ui.contents(), "Please input a valid TASK_GUID\n");
        assert!(h.task_runner.delete_task_calls().is_empty());
    }

    #[test]
    fn commands_can_be_run_repeatedly() {
        let h = harness();
        let delete = h.factory.make_delete_task_command();

        delete.run(&args(&["task-guid-1"]));
        delete.run(&args(&["task-guid-2"]));

        assert_eq!(
            h.task_runner.delete_task_calls(),
            ["task-guid-1", "task-guid-2"]
        );
        assert_eq!(h.ui.contents(), "OK\nOK\n");
    }

    #[test]
    fn commands_carry_their_names() {
        let h = harness();
        let submit = h.factory.make_submit_task_command();
        let delete = h.factory.make_delete_task_command();

        assert_eq!((submit.name, submit.alias), ("submit-task", "st"));
        assert_eq!((delete.name, delete.alias), ("delete-task", "dt"));
    }
}
