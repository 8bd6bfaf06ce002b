use crate::model::Topic;

pub(super) fn topics() -> Vec<Topic> {
    vec![
        Topic::new("git rebase", "History Rewriting", "replay commits onto a new base for a linear history")
            .steps([
                "Finds the commits unique to your branch",
                "Resets the branch to the new base",
                "Re-applies each of your commits in order, pausing on conflicts",
                "The replayed commits are new objects; the originals remain reachable via the reflog",
            ])
            .example("git rebase main", "move your feature branch on top of current main")
            .example("git rebase -i HEAD~5", "interactively squash, reorder, or drop the last five commits")
            .real_world("Teams that want a linear main branch rebase feature branches instead of merging main into them. Never rebase commits others have already pulled."),
        Topic::new("git reset", "History Rewriting", "move the branch pointer, optionally adjusting index and working tree")
            .steps([
                "--soft moves the branch pointer only",
                "--mixed (the default) also unstages",
                "--hard additionally overwrites the working tree, discarding local changes",
            ])
            .example("git reset --soft HEAD~1", "undo the last commit but keep its changes staged")
            .example("git reset --hard origin/main", "make the branch exactly match the remote"),
        Topic::new("git revert", "History Rewriting", "create a new commit that undoes an earlier one")
            .example("git revert a1b2c3d", "safe undo on a shared branch")
            .real_world("On public branches revert is the only polite undo; reset rewrites history others may hold."),
        Topic::new("git cherry-pick", "History Rewriting", "apply a single commit from elsewhere onto the current branch")
            .example("git cherry-pick f00dcafe", "port one fix without merging the whole branch")
            .real_world("The standard tool for backporting a fix onto a release branch."),
        Topic::new("git reflog", "Recovery", "log of every position HEAD has pointed to")
            .steps([
                "Every checkout, commit, rebase, and reset appends an entry",
                "Entries survive until expiry even when no branch references the commit",
                "Checking out a reflog entry resurrects 'lost' work",
            ])
            .example("git reflog", "list recent HEAD positions")
            .example("git reset --hard HEAD@{2}", "rewind to where HEAD was two moves ago")
            .real_world("The answer to 'I rebased and my commits are gone' is almost always in the reflog."),
        Topic::new("git stash", "Recovery", "shelve uncommitted changes and restore them later")
            .example("git stash push -m 'wip: half-finished search'", "label the shelf entry")
            .example("git stash pop", "re-apply the latest stash and drop it"),
        Topic::new("git bisect", "Debugging", "binary-search history for the commit that introduced a bug")
            .steps([
                "Mark one known-bad and one known-good commit",
                "Git checks out the midpoint; you test and mark it good or bad",
                "Repeats until a single culprit commit remains",
            ])
            .example("git bisect start && git bisect bad && git bisect good v1.4", "narrow a regression in log2(n) steps")
            .real_world("With a script and 'git bisect run', the whole hunt is automatic."),
        Topic::new("git blame", "Debugging", "show which commit and author last touched each line")
            .example("git blame -L 40,60 src/query.rs", "annotate only a line range"),
        Topic::new("git worktree", "Workspace", "check out several branches of one repository at once")
            .example("git worktree add ../hotfix release/2.1", "work on a hotfix without disturbing your feature branch"),
        Topic::new("git submodule", "Workspace", "embed another repository at a pinned commit")
            .example("git submodule update --init --recursive", "fetch all nested submodules after a clone"),
    ]
}
