use log::trace;

use crate::error::Error;
use crate::linked_list::MyLinkedList;

#[derive(Debug, PartialEq, Eq)]
pub enum ListCommand {
    Quit,
    Print,
    Get(i32),
    AddAtHead(i32),
    AddAtTail(i32),
    AddAtIndex(i32, i32),
    DeleteAtIndex(i32),
}

fn number(
    tokens: &[&str],
    position: usize,
    command: &'static str,
    argument: &'static str,
) -> Result<i32, Error> {
    let token = tokens
        .get(position)
        .ok_or(Error::MissingArgument { command, argument })?;
    token.parse::<i32>().map_err(|source| Error::InvalidNumber {
        token: token.to_string(),
        source,
    })
}

impl ListCommand {
    pub fn from_tokens(tokens: &[&str]) -> Result<ListCommand, Error> {
        let name = tokens.first().ok_or(Error::EmptyCommand)?;
        match *name {
            "q" | "quit" => Ok(ListCommand::Quit),
            "p" | "print" => Ok(ListCommand::Print),
            "g" | "get" => Ok(ListCommand::Get(number(tokens, 1, "get", "index")?)),
            "head" | "addAtHead" => {
                Ok(ListCommand::AddAtHead(number(tokens, 1, "head", "value")?))
            }
            "tail" | "addAtTail" => {
                Ok(ListCommand::AddAtTail(number(tokens, 1, "tail", "value")?))
            }
            "insert" | "addAtIndex" => Ok(ListCommand::AddAtIndex(
                number(tokens, 1, "insert", "index")?,
                number(tokens, 2, "insert", "value")?,
            )),
            "delete" | "deleteAtIndex" => {
                Ok(ListCommand::DeleteAtIndex(number(tokens, 1, "delete", "index")?))
            }
            // Default case:
            other => Err(Error::UnknownCommand(other.to_string())),
        }
    }

    /// Applies the command to `list` and returns the line to show the user, if any.
    pub fn execute(&self, list: &mut MyLinkedList) -> Option<String> {
        trace!("applying {:?} to {}", self, list);
        match *self {
            ListCommand::Quit => None,
            ListCommand::Print => Some(list.to_string()),
            ListCommand::Get(index) => Some(match list.get(index) {
                Some(value) => value.to_string(),
                None => "not found".to_string(),
            }),
            ListCommand::AddAtHead(value) => {
                list.add_at_head(value);
                None
            }
            ListCommand::AddAtTail(value) => {
                list.add_at_tail(value);
                None
            }
            ListCommand::AddAtIndex(index, value) => {
                list.add_at_index(index, value);
                None
            }
            ListCommand::DeleteAtIndex(index) => {
                list.delete_at_index(index);
                None
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(line: &str) -> Result<ListCommand, Error> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        ListCommand::from_tokens(&tokens)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse("q").unwrap(), ListCommand::Quit);
        assert_eq!(parse("print").unwrap(), ListCommand::Print);
        assert_eq!(parse("get -1").unwrap(), ListCommand::Get(-1));
        assert_eq!(parse("addAtHead 7").unwrap(), ListCommand::AddAtHead(7));
        assert_eq!(parse("tail 3").unwrap(), ListCommand::AddAtTail(3));
        assert_eq!(parse("insert 1 2").unwrap(), ListCommand::AddAtIndex(1, 2));
        assert_eq!(
            parse("deleteAtIndex 0").unwrap(),
            ListCommand::DeleteAtIndex(0)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(""), Err(Error::EmptyCommand)));
        assert!(matches!(parse("pop"), Err(Error::UnknownCommand(name)) if name == "pop"));
        assert!(matches!(
            parse("insert 1"),
            Err(Error::MissingArgument {
                command: "insert",
                argument: "value"
            })
        ));
        let err = parse("get x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"x\" is not a valid number: invalid digit found in string"
        );
    }

    #[test]
    fn test_execute() {
        let mut list = MyLinkedList::new();
        for line in ["head 1", "tail 3", "insert 1 2", "insert 9 9"] {
            assert_eq!(parse(line).unwrap().execute(&mut list), None);
        }
        assert_eq!(ListCommand::Get(1).execute(&mut list).as_deref(), Some("2"));
        assert_eq!(
            ListCommand::Print.execute(&mut list).as_deref(),
            Some("[1, 2, 3]")
        );
        ListCommand::DeleteAtIndex(0).execute(&mut list);
        assert_eq!(ListCommand::Get(0).execute(&mut list).as_deref(), Some("2"));
        assert_eq!(
            ListCommand::Get(2).execute(&mut list).as_deref(),
            Some("not found")
        );
    }
}
