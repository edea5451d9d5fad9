/// One line of input at the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    List,
    Sort,
    Exit,
    Unknown(String),
}

impl MenuCommand {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input {
            "1" => MenuCommand::List,
            "2" => MenuCommand::Sort,
            _ if input.eq_ignore_ascii_case("exit") => MenuCommand::Exit,
            other => MenuCommand::Unknown(other.to_string()),
        }
    }
}

pub const MAIN_MENU: &str = "1 - Вывести список вакансий;\n\
2 - Отсортировать по зарплате;\n\
exit - для выхода.\n\
>>> ";

pub const SORT_MENU: &str = "> - по убыванию\n< - по возрастанию\n>>> ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(MenuCommand::parse("1\n"), MenuCommand::List);
        assert_eq!(MenuCommand::parse(" 2 "), MenuCommand::Sort);
        assert_eq!(MenuCommand::parse("EXIT"), MenuCommand::Exit);
        assert_eq!(MenuCommand::parse("3"), MenuCommand::Unknown("3".into()));
    }
}
