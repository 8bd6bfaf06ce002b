use crate::model::Topic;

pub(super) fn topics() -> Vec<Topic> {
    vec![
        Topic::new("ls", "File Management", "list directory contents")
            .steps([
                "Reads the directory entries of the given path (the current directory by default)",
                "Filters hidden entries unless -a is passed",
                "Formats the result as columns, or one entry per line with -l",
            ])
            .example("ls -la", "long listing including hidden files")
            .example("ls -lh /var/log", "human-readable sizes for a specific directory")
            .real_world("Usually the first command typed after entering an unfamiliar directory."),
        Topic::new("cd", "File Management", "change the current working directory")
            .example("cd ~/projects", "jump to a directory under your home")
            .example("cd -", "return to the previous directory"),
        Topic::new("cp", "File Management", "copy files and directories")
            .example("cp config.toml config.toml.bak", "keep a backup before editing")
            .example("cp -r site/ /var/www/", "copy a directory tree recursively"),
        Topic::new("mv", "File Management", "move or rename files and directories")
            .example("mv draft.md posts/2024-01-release.md", "renaming is moving"),
        Topic::new("rm", "File Management", "remove files and directories")
            .example("rm -i *.tmp", "prompt before each removal")
            .real_world("There is no trash can on the command line; -i exists for a reason."),
        Topic::new("find", "File Management", "walk a directory tree matching names, sizes, and times")
            .steps([
                "Walks every entry below the starting path",
                "Applies each test (-name, -type, -mtime) to every entry",
                "Runs the action (-print by default, or -exec) on entries that pass all tests",
            ])
            .example("find . -name '*.rs'", "all Rust sources below the current directory")
            .example("find /var/log -mtime -1 -type f", "files modified in the last day")
            .real_world("Paired with -exec or xargs, find is the batch tool for everything the shell glob can't reach."),
        Topic::new("grep", "Text Processing", "search text using patterns and regular expressions")
            .steps([
                "Reads input line by line, from files or stdin",
                "Tests each line against the pattern",
                "Prints matching lines, with -n adding line numbers and -v inverting the match",
            ])
            .example("grep -rn 'TODO' src/", "find every TODO with file and line")
            .example("ps aux | grep nginx", "filter another command's output")
            .real_world("The glue of Unix pipelines; most ad hoc log investigation starts with a grep."),
        Topic::new("sed", "Text Processing", "stream editor for filtering and transforming text")
            .example("sed 's/http:/https:/g' urls.txt", "substitute on every line")
            .example("sed -n '5,10p' server.log", "print only a line range"),
        Topic::new("awk", "Text Processing", "pattern scanning and column-oriented text processing")
            .example("awk '{print $1}' access.log", "first column of every line")
            .example("awk -F: '$3 >= 1000 {print $1}' /etc/passwd", "rows matching a condition"),
        Topic::new("sort", "Text Processing", "sort lines of text")
            .example("sort -t, -k2 -n data.csv", "numeric sort on the second CSV column")
            .example("du -s * | sort -rn", "largest directories first"),
        Topic::new("ps", "Process Management", "report a snapshot of running processes")
            .example("ps aux", "every process with owner, cpu and memory")
            .real_world("The standard starting point when a machine feels slow."),
        Topic::new("top", "Process Management", "live, continuously updating view of processes")
            .example("top -o %MEM", "order by memory usage"),
        Topic::new("kill", "Process Management", "send a signal to a process")
            .steps([
                "Looks up the process by PID",
                "Sends the requested signal (SIGTERM by default)",
                "SIGTERM asks the process to exit; SIGKILL (-9) removes it without appeal",
            ])
            .example("kill 4301", "polite termination request")
            .example("kill -9 4301", "force kill when the process ignores SIGTERM"),
        Topic::new("tar", "Archiving & Compression", "bundle files into an archive and extract them again")
            .example("tar -czf backup.tar.gz project/", "create a gzip-compressed archive")
            .example("tar -xzf backup.tar.gz", "extract it")
            .real_world("Release artifacts, server backups, and 'just send me the folder' all end up as tarballs."),
        Topic::new("gzip", "Archiving & Compression", "compress single files with the DEFLATE algorithm")
            .steps([
                "Reads the input file",
                "Replaces repeated byte sequences with back-references",
                "Writes a .gz file and removes the original; gunzip reverses the process",
            ])
            .example("gzip -k access.log", "compress but keep the original")
            .example("gunzip access.log.gz", "restore the original file"),
        Topic::new("chmod", "Permissions", "change file mode bits for owner, group, and others")
            .steps([
                "Each file carries read/write/execute bits for owner, group, and others",
                "Symbolic form (u+x) flips individual bits; octal form (755) sets all nine at once",
            ])
            .example("chmod +x deploy.sh", "make a script executable")
            .example("chmod 600 ~/.ssh/id_ed25519", "private key readable by you alone")
            .real_world("SSH refuses keys with loose permissions, which is how most people meet chmod 600."),
        Topic::new("chown", "Permissions", "change the owner and group of files")
            .example("chown -R www-data:www-data /var/www", "hand a tree to the web server user"),
    ]
}
