/// One menu entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Sell,
    SearchByName,
    SearchByType,
    ListAll,
    Restock,
    Remove,
    RemoveExpired,
    Save,
    Load,
    TotalValue,
    Exit,
}

impl Command {
    /// Menu entries in display order.
    pub const MENU: [Command; 12] = [
        Command::Add,
        Command::Sell,
        Command::SearchByName,
        Command::SearchByType,
        Command::ListAll,
        Command::Restock,
        Command::Remove,
        Command::RemoveExpired,
        Command::Save,
        Command::Load,
        Command::TotalValue,
        Command::Exit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Command::Add => "1",
            Command::Sell => "2",
            Command::SearchByName => "3",
            Command::SearchByType => "4",
            Command::ListAll => "5",
            Command::Restock => "6",
            Command::Remove => "7",
            Command::RemoveExpired => "8",
            Command::Save => "9",
            Command::Load => "10",
            Command::TotalValue => "11",
            Command::Exit => "0",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::Add => "Add product",
            Command::Sell => "Sell product",
            Command::SearchByName => "Search products by name",
            Command::SearchByType => "Search products by type",
            Command::ListAll => "View all products",
            Command::Restock => "Restock product",
            Command::Remove => "Remove product",
            Command::RemoveExpired => "Remove expired products",
            Command::Save => "Save inventory to file",
            Command::Load => "Load inventory from file",
            Command::TotalValue => "View total inventory value",
            Command::Exit => "Exit",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::MENU.into_iter().find(|c| c.key() == input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique_and_parse_back() {
        for command in Command::MENU {
            assert_eq!(Command::parse(command.key()), Some(command));
        }
    }

    #[test]
    fn parse_trims_and_rejects_unknown_keys() {
        assert_eq!(Command::parse(" 10 \n"), Some(Command::Load));
        assert_eq!(Command::parse("12"), None);
        assert_eq!(Command::parse(""), None);
    }
}
