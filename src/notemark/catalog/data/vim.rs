use crate::model::Topic;

pub(super) fn topics() -> Vec<Topic> {
    vec![
        Topic::new("Normal Mode", "Modes", "the default mode where keys are commands, not text")
            .steps([
                "Vim starts here; every key maps to a motion or an operation",
                "Esc returns here from any other mode",
                "Commands compose: operator + motion (d2w deletes two words)",
            ])
            .real_world("Touch typists live in Normal mode and visit Insert mode only to type."),
        Topic::new("Insert Mode", "Modes", "type text as in an ordinary editor")
            .example("i", "insert before the cursor")
            .example("o", "open a new line below and insert"),
        Topic::new("Visual Mode", "Modes", "select text with motions, then operate on the selection")
            .example("vip", "select the current paragraph")
            .example("V", "select whole lines"),
        Topic::new("Motions", "Motion", "move the cursor with hjkl and friends")
            .steps([
                "h j k l move one column or line",
                "Counts multiply any motion: 5j moves five lines down",
            ])
            .example("5j", "down five lines"),
        Topic::new("Word Motions", "Motion", "jump by words with w, b, and e")
            .example("3w", "forward three words")
            .example("ce", "change to the end of the current word"),
        Topic::new("Line Jumps", "Motion", "move within a line and across the file")
            .example("0", "start of line")
            .example("gg", "first line of the file")
            .example("G", "last line of the file"),
        Topic::new("dd", "Editing", "delete the current line into the unnamed register")
            .example("3dd", "delete three lines")
            .real_world("Deleted text is yanked as a side effect, so dd then p moves a line."),
        Topic::new("Yank and Put", "Editing", "copy with y, paste with p")
            .example("yiw", "yank the word under the cursor")
            .example("\"ayy", "yank a line into named register a"),
        Topic::new("Undo and Redo", "Editing", "step backwards and forwards through changes")
            .example("u", "undo")
            .example("Ctrl-r", "redo"),
        Topic::new("Search", "Search & Replace", "find patterns with / and ?")
            .steps([
                "/pattern searches forward, ?pattern backward",
                "n repeats the search, N repeats it the other way",
            ])
            .example("/TODO", "jump to the next TODO"),
        Topic::new("Substitute", "Search & Replace", "replace matches with :s")
            .example(":%s/http:/https:/g", "replace in the whole file")
            .example(":'<,'>s/foo/bar/gc", "replace in the visual selection, confirming each"),
        Topic::new("Buffers", "Files & Buffers", "every open file lives in a buffer")
            .example(":ls", "list buffers")
            .example(":b search", "switch to the buffer whose name matches"),
        Topic::new("Splits", "Files & Buffers", "view several buffers at once")
            .example(":vsp src/slug.rs", "vertical split")
            .example("Ctrl-w w", "cycle between windows"),
        Topic::new("Macros", "Files & Buffers", "record a keystroke sequence and replay it")
            .steps([
                "qa starts recording into register a",
                "q stops recording",
                "@a replays; 20@a replays twenty times",
            ])
            .example("qa0f,s; <Esc>q", "record a one-line edit, then replay it down the file")
            .real_world("A recorded macro plus a count is Vim's answer to multi-cursor editing."),
    ]
}
