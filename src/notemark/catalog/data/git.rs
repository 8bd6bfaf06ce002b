use crate::model::Topic;

pub(super) fn topics() -> Vec<Topic> {
    vec![
        Topic::new("git init", "Getting Started", "create an empty repository in the current directory")
            .example("git init", "start tracking the current directory"),
        Topic::new("git clone", "Getting Started", "copy a remote repository, history included, to your machine")
            .steps([
                "Downloads every commit, branch, and tag from the remote",
                "Checks out the default branch into a new working directory",
                "Records the source as the remote named origin",
            ])
            .example("git clone https://github.com/rust-lang/mdBook.git", "clone over HTTPS")
            .example("git clone --depth 1 <url>", "shallow clone when history doesn't matter"),
        Topic::new("git status", "Staging & Committing", "show changed, staged, and untracked files")
            .example("git status -sb", "the short form most people alias"),
        Topic::new("git add", "Staging & Committing", "stage changes for the next commit")
            .steps([
                "Copies the current content of the named paths into the index",
                "The commit is built from the index, not the working tree",
                "Later edits to the same file are not included until added again",
            ])
            .example("git add src/main.rs", "stage one file")
            .example("git add -p", "stage hunk by hunk, reviewing each change")
            .real_world("git add -p doubles as a self-review pass before every commit."),
        Topic::new("git commit", "Staging & Committing", "record the staged snapshot in history")
            .example("git commit -m 'Fix slug collision check'", "commit with an inline message")
            .example("git commit --amend", "replace the previous commit with the corrected one"),
        Topic::new("git branch", "Branching", "list, create, or delete branch pointers")
            .example("git branch feature/search", "create a branch without switching to it")
            .example("git branch -d feature/search", "delete a merged branch"),
        Topic::new("git checkout", "Branching", "switch branches or restore files from a commit")
            .example("git checkout -b fix/not-found", "create and switch in one step")
            .example("git checkout -- README.md", "discard local edits to one file"),
        Topic::new("git merge", "Branching", "join another branch's history into the current one")
            .steps([
                "Finds the common ancestor of both branches",
                "Replays both sides' changes on top of it",
                "Fast-forwards when possible, otherwise writes a merge commit; overlapping edits become conflicts to resolve by hand",
            ])
            .example("git merge feature/search", "bring a finished feature into main"),
        Topic::new("git push", "Remotes", "upload local commits to a remote branch")
            .example("git push origin main", "publish main to origin")
            .example("git push -u origin feature/search", "first push, setting the upstream"),
        Topic::new("git pull", "Remotes", "fetch from a remote and integrate into the current branch")
            .example("git pull --rebase", "replay local work on top of the fetched commits"),
        Topic::new("git fetch", "Remotes", "download remote history without touching your working tree")
            .example("git fetch origin", "update remote-tracking branches only")
            .real_world("fetch then inspect is the cautious alternative to a blind pull."),
        Topic::new("git log", "Inspection", "browse commit history")
            .example("git log --oneline --graph --all", "compact picture of every branch")
            .example("git log -p src/slug.rs", "history of one file with diffs"),
        Topic::new("git diff", "Inspection", "show changes between working tree, index, and commits")
            .example("git diff", "unstaged changes")
            .example("git diff --staged", "what the next commit will contain"),
    ]
}
