//! Script command reference.

/// A documented script command.
#[derive(Debug, Clone)]
pub struct CommandHelp {
    pub op: &'static str,
    pub example: &'static str,
    pub description: &'static str,
}

impl CommandHelp {
    pub const fn new(op: &'static str, example: &'static str, description: &'static str) -> Self {
        Self {
            op,
            example,
            description,
        }
    }
}

/// Registry of all script commands.
pub struct CommandReference;

impl CommandReference {
    /// Get all documented commands.
    pub fn all() -> Vec<CommandHelp> {
        vec![
            CommandHelp::new("mode", r#"{"op":"mode","mode":"select"}"#, "Switch to add, select, delete or move"),
            CommandHelp::new(
                "pointer",
                r#"{"op":"pointer","kind":"down","x":0.5,"y":-1,"target":3}"#,
                "Pointer event in domain units (down, move, up, leave)",
            ),
            CommandHelp::new(
                "pixel",
                r#"{"op":"pixel","kind":"down","x":400,"y":200}"#,
                "Pointer event in view pixels; presses are hit-tested",
            ),
            CommandHelp::new("click", r#"{"op":"click","x":1,"y":1}"#, "Press and release in domain units"),
            CommandHelp::new(
                "save",
                r#"{"op":"save","name":"p1","overwrite":false}"#,
                "Save the working set as a preset",
            ),
            CommandHelp::new("load", r#"{"op":"load","name":"p1"}"#, "Load a preset into the working set"),
            CommandHelp::new("delete", r#"{"op":"delete","name":"p1"}"#, "Delete a preset"),
            CommandHelp::new("add_random", r#"{"op":"add_random","count":5}"#, "Add random points"),
            CommandHelp::new("render", r#"{"op":"render"}"#, "Print a frame"),
        ]
    }

    /// Print all commands to console.
    pub fn print_all() {
        println!("\n=== Script Commands ===");
        for command in Self::all() {
            println!("  {:12} {}", command.op, command.description);
            println!("  {:12} {}", "", command.example);
        }
        println!();
    }
}
