use linked_list::command::ListCommand;
use linked_list::MyLinkedList;
use log::{error, info, warn};
use rustyline::error::ReadlineError;
use rustyline::Editor;

pub struct Repl {
    prompt: String,
    history_path: Option<String>,
    readline: Editor<()>,
    list: MyLinkedList,
}

impl Repl {
    pub fn new(prompt: String, history_path: Option<String>, list: MyLinkedList) -> Repl {
        let mut readline = Editor::<()>::new();
        if let Some(path) = &history_path {
            if let Err(err) = readline.load_history(path) {
                warn!("could not load history from {}: {}", path, err);
            }
        }
        info!("starting with {} elements", list.len());
        Repl {
            prompt,
            history_path,
            readline,
            list,
        }
    }

    pub fn run(&mut self) {
        loop {
            let cmd = match self.get_next_command() {
                Some(cmd) => cmd,
                None => return,
            };
            if cmd == ListCommand::Quit {
                return;
            }
            if let Some(output) = cmd.execute(&mut self.list) {
                println!("{}", output);
            }
        }
    }

    /// Prompts until a line parses into a command. Returns `None` once input is exhausted or
    /// broken.
    fn get_next_command(&mut self) -> Option<ListCommand> {
        loop {
            match self.readline.readline(&self.prompt) {
                Err(ReadlineError::Interrupted) => {
                    // ctrl+c is ignored
                    println!("Type \"quit\" to exit");
                }
                Err(ReadlineError::Eof) => {
                    return Some(ListCommand::Quit);
                }
                Err(err) => {
                    error!("failed to read input: {}", err);
                    return None;
                }
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.readline.add_history_entry(line.as_str());
                    if let Some(path) = &self.history_path {
                        if let Err(err) = self.readline.save_history(path) {
                            warn!("failed to save history file at {}: {}", path, err);
                        }
                    }
                    let tokens: Vec<&str> = line.split_whitespace().collect();
                    match ListCommand::from_tokens(&tokens) {
                        Ok(cmd) => return Some(cmd),
                        Err(err) => println!("{}", err),
                    }
                }
            }
        }
    }
}
