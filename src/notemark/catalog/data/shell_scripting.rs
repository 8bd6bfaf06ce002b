use crate::model::Topic;

pub(super) fn topics() -> Vec<Topic> {
    vec![
        Topic::new("Shebang", "Basics", "the #! first line that selects the interpreter")
            .example("#!/usr/bin/env bash", "portable bash shebang"),
        Topic::new("Variables", "Basics", "assign with =, expand with $; quoting controls splitting")
            .steps([
                "NAME=value assigns (no spaces around =)",
                "\"$NAME\" expands safely; unquoted expansion splits on whitespace and globs",
            ])
            .example("greeting=\"hello $USER\"", "assignment with expansion")
            .real_world("Unquoted variables are the single most common shell bug; quote by default."),
        Topic::new("Command Substitution", "Basics", "capture a command's output into a variable")
            .example("today=$(date +%F)", "capture the current date")
            .example("files=$(git diff --name-only HEAD~1)", "capture a file list"),
        Topic::new("Pipes and Redirection", "Basics", "wire stdout, stderr, and files together")
            .example("grep ERROR app.log | sort | uniq -c", "count distinct error lines")
            .example("make build > build.log 2>&1", "send both streams to a file"),
        Topic::new("If Statements", "Control Flow", "branch on exit codes and test expressions")
            .example("if [[ -f .env ]]; then source .env; fi", "load a file only when present"),
        Topic::new("For Loops", "Control Flow", "iterate over words, globs, or command output")
            .example("for f in *.log; do gzip \"$f\"; done", "compress every log file"),
        Topic::new("While Loops", "Control Flow", "repeat while a command succeeds")
            .example("while read -r line; do echo \">> $line\"; done < input.txt", "process a file line by line"),
        Topic::new("Functions", "Control Flow", "name a block, pass arguments as $1..$n")
            .example("deploy() { scp \"$1\" web1:/srv/; }", "a small reusable step"),
        Topic::new("Exit Codes", "Robustness", "every command returns 0 for success, non-zero for failure")
            .steps([
                "$? holds the last command's code",
                "&& and || chain on success and failure",
                "Scripts should exit non-zero when any step fails",
            ])
            .example("cargo test || exit 1", "propagate a failure upward"),
        Topic::new("Strict Mode", "Robustness", "set -euo pipefail makes failures loud and early")
            .steps([
                "-e exits on the first failing command",
                "-u treats unset variables as errors",
                "pipefail fails a pipeline when any stage fails, not just the last",
            ])
            .example("set -euo pipefail", "the standard first line after the shebang")
            .real_world("CI scripts without strict mode fail silently and pass builds they shouldn't."),
    ]
}
