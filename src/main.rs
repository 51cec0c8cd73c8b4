use clap::Parser;
use linked_list::MyLinkedList;

mod repl;

/// Interactive driver for a positional linked list of integers.
///
/// Commands: get <i>, head <v>, tail <v>, insert <i> <v>, delete <i>, print, quit.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct CmdOptions {
    /// Prompt shown before each command
    #[arg(long, default_value = "(list) ")]
    prompt: String,
    /// File to load and save command history
    #[arg(long)]
    history: Option<String>,
    /// Values appended to the list before the first prompt
    #[arg(long, num_args = 1.., allow_negative_numbers = true)]
    init: Vec<i32>,
}

fn main() {
    // Log level comes from RUST_LOG, e.g. RUST_LOG=debug to see ignored out-of-range writes
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = CmdOptions::parse();
    let list: MyLinkedList = options.init.into_iter().collect();
    repl::Repl::new(options.prompt, options.history, list).run();
}
