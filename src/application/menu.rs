// src/application/menu.rs

/// Main menu entries, numbered the way they are typed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MenuOption {
    Exit = 0,
    AddBook = 1,
    RemoveBook = 2,
    ListAllBooks = 3,
    SearchBooks = 4,
    ChangeBookStatus = 5,
    AddUser = 6,
    ListAllUsers = 7,
    ListBorrowedBooksByUser = 8,
    ListAllBorrowedBooks = 9,
}

impl MenuOption {
    /// Display order: actions first, Exit last
    pub const ALL: [MenuOption; 10] = [
        MenuOption::AddBook,
        MenuOption::RemoveBook,
        MenuOption::ListAllBooks,
        MenuOption::SearchBooks,
        MenuOption::ChangeBookStatus,
        MenuOption::AddUser,
        MenuOption::ListAllUsers,
        MenuOption::ListBorrowedBooksByUser,
        MenuOption::ListAllBorrowedBooks,
        MenuOption::Exit,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Parse what the user typed at the menu prompt
    pub fn from_choice(input: &str) -> Option<Self> {
        let number: u8 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|option| option.number() == number)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Exit => "Exit",
            MenuOption::AddBook => "Add New Book",
            MenuOption::RemoveBook => "Remove Book",
            MenuOption::ListAllBooks => "List All Books",
            MenuOption::SearchBooks => "Search Books",
            MenuOption::ChangeBookStatus => "Borrow Or Return A Book",
            MenuOption::AddUser => "Add New User",
            MenuOption::ListAllUsers => "List All Users",
            MenuOption::ListBorrowedBooksByUser => "List Books Borrowed By A User",
            MenuOption::ListAllBorrowedBooks => "List All Borrowed Books",
        }
    }

    /// Highest selectable number
    pub fn max_number() -> u8 {
        Self::ALL
            .iter()
            .map(|option| option.number())
            .max()
            .unwrap_or(0)
    }
}

impl std::fmt::Display for MenuOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_choice_accepts_every_number() {
        for option in MenuOption::ALL {
            assert_eq!(
                MenuOption::from_choice(&option.number().to_string()),
                Some(option)
            );
        }
    }

    #[test]
    fn test_from_choice_trims_input() {
        assert_eq!(MenuOption::from_choice("  5 \n"), Some(MenuOption::ChangeBookStatus));
    }

    #[test]
    fn test_from_choice_rejects_garbage() {
        assert_eq!(MenuOption::from_choice("10"), None);
        assert_eq!(MenuOption::from_choice("-1"), None);
        assert_eq!(MenuOption::from_choice("two"), None);
        assert_eq!(MenuOption::from_choice(""), None);
    }

    #[test]
    fn test_display_and_range() {
        assert_eq!(MenuOption::AddBook.to_string(), "1. Add New Book");
        assert_eq!(MenuOption::Exit.to_string(), "0. Exit");
        assert_eq!(MenuOption::max_number(), 9);
    }
}
