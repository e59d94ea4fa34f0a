//! Built-in editor operations that can be bound to keys
//!
//! `Command` is the keyboard-action table, `MouseCommand` the mouse-action
//! table. A name found in neither is not an error: it becomes a script
//! action resolved when the binding fires (see `action.rs`).

use std::fmt;
use std::str::FromStr;

/// Declares the command enum together with its name table, so a variant's
/// binding name is always its identifier.
macro_rules! commands {
    (
        $(#[$enum_meta:meta])*
        pub enum $ty:ident {
            $(
                $(#[$meta:meta])*
                $variant:ident,
            )*
        }
    ) => {
        $(#[$enum_meta])*
        pub enum $ty {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        impl $ty {
            /// Every command, in declaration order
            pub const ALL: &'static [$ty] = &[$($ty::$variant,)*];

            /// The name used for this command in bindings files
            pub const fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => stringify!($variant),)*
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

commands! {
    /// Built-in keyboard actions
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Command {
        // ====================================================================
        // Cursor Movement
        // ====================================================================
        CursorUp,
        CursorDown,
        CursorPageUp,
        CursorPageDown,
        CursorLeft,
        CursorRight,
        /// Move to the start of the buffer
        CursorStart,
        /// Move to the end of the buffer
        CursorEnd,
        WordRight,
        WordLeft,
        StartOfLine,
        EndOfLine,
        ParagraphPrevious,
        ParagraphNext,
        JumpToMatchingBrace,

        // ====================================================================
        // Selection
        // ====================================================================
        SelectToStart,
        SelectToEnd,
        SelectUp,
        SelectDown,
        SelectLeft,
        SelectRight,
        SelectWordRight,
        SelectWordLeft,
        SelectLine,
        SelectToStartOfLine,
        SelectToEndOfLine,
        SelectAll,
        SelectPageUp,
        SelectPageDown,

        // ====================================================================
        // Text Editing
        // ====================================================================
        InsertNewline,
        InsertSpace,
        Backspace,
        Delete,
        InsertTab,
        DeleteWordRight,
        DeleteWordLeft,
        DuplicateLine,
        DeleteLine,
        MoveLinesUp,
        MoveLinesDown,
        IndentSelection,
        OutdentSelection,
        OutdentLine,
        ToggleOverwriteMode,

        // ====================================================================
        // Clipboard and History
        // ====================================================================
        Undo,
        Redo,
        Copy,
        Cut,
        CutLine,
        Paste,
        /// Paste from the primary selection (X11 middle-click buffer)
        PastePrimary,

        // ====================================================================
        // Files and Search
        // ====================================================================
        Save,
        SaveAll,
        SaveAs,
        OpenFile,
        Find,
        FindNext,
        FindPrevious,

        // ====================================================================
        // View
        // ====================================================================
        Center,
        Start,
        End,
        PageUp,
        PageDown,
        HalfPageUp,
        HalfPageDown,
        ScrollUp,
        ScrollDown,
        /// Show or hide the help buffer
        ToggleHelp,
        /// Show or hide the key hint bar
        ToggleKeyMenu,
        ToggleRuler,
        JumpLine,
        ClearStatus,

        // ====================================================================
        // Prompts and Modes
        // ====================================================================
        ShellMode,
        CommandMode,
        Escape,
        ToggleMacro,
        PlayMacro,
        Suspend,
        Quit,
        QuitAll,

        // ====================================================================
        // Tabs and Splits
        // ====================================================================
        AddTab,
        PreviousTab,
        NextTab,
        NextSplit,
        PreviousSplit,
        Unsplit,
        VSplit,
        HSplit,

        // ====================================================================
        // Multi-Cursor
        // ====================================================================
        SpawnMultiCursor,
        SpawnMultiCursorSelect,
        RemoveMultiCursor,
        RemoveAllMultiCursors,
        SkipMultiCursor,
    }
}

commands! {
    /// Built-in mouse actions; these receive the triggering mouse event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum MouseCommand {
        /// Place the cursor (or extend a drag selection) at the pointer
        MousePress,
        /// Add a cursor at the pointer
        MouseMultiCursor,
    }
}

/// Old name kept so existing bindings files keep working
const LEGACY_INSERT_ENTER: &str = "InsertEnter";

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == LEGACY_INSERT_ENTER {
            return Ok(Command::InsertNewline);
        }
        Command::ALL
            .iter()
            .copied()
            .find(|command| command.name() == s)
            .ok_or(())
    }
}

impl FromStr for MouseCommand {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MouseCommand::ALL
            .iter()
            .copied()
            .find(|command| command.name() == s)
            .ok_or(())
    }
}
