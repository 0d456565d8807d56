// src/application/shell.rs
//
// Interactive Console
//
// RULES:
// - Reads from any BufRead, writes to any Write (stdin/stdout in the binary)
// - Prompts trim their answer and ask again on a blank line
// - A failed operation is printed and the menu comes back
// - End of input behaves like choosing Exit

use std::io::{BufRead, Write};
use std::path::PathBuf;

use uuid::Uuid;

use crate::application::error_handling::ErrorResponse;
use crate::application::menu::MenuOption;
use crate::application::report;
use crate::domain::BorrowTransition;
use crate::error::AppResult;
use crate::services::{AddBookRequest, LibraryService};

const BANNER: &str = " _______________________________\n\
                      |  SmartBook - Library System   |\n\
                      |_______________________________|";

/// Whether the menu loop keeps going after a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct LibraryShell<R, W> {
    service: LibraryService,
    input: R,
    output: W,
    report_path: PathBuf,
}

impl<R: BufRead, W: Write> LibraryShell<R, W> {
    pub fn new(service: LibraryService, input: R, output: W, report_path: impl Into<PathBuf>) -> Self {
        Self {
            service,
            input,
            output,
            report_path: report_path.into(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until Exit or end of input
    ///
    /// Only a failure to talk to the terminal ends the loop with an error.
    pub fn run(&mut self) -> AppResult<()> {
        writeln!(self.output, "{}", BANNER)?;

        loop {
            self.show_menu()?;

            let Some(option) = self.read_choice()? else {
                break;
            };

            match self.dispatch(option) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) => {
                    let response = ErrorResponse::from_app_error(&e);
                    writeln!(self.output, "{}", response)?;
                }
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> AppResult<Flow> {
        log::debug!("Menu choice: {}", option.label());

        match option {
            MenuOption::Exit => Ok(Flow::Exit),
            MenuOption::AddBook => self.add_book(),
            MenuOption::RemoveBook => self.remove_book(),
            MenuOption::ListAllBooks => self.list_all_books(),
            MenuOption::SearchBooks => self.search_books(),
            MenuOption::ChangeBookStatus => self.change_book_status(),
            MenuOption::AddUser => self.add_user(),
            MenuOption::ListAllUsers => self.list_all_users(),
            MenuOption::ListBorrowedBooksByUser => self.list_borrowed_books_by_user(),
            MenuOption::ListAllBorrowedBooks => self.list_all_borrowed_books(),
        }
    }

    // ========================================================================
    // INPUT
    // ========================================================================

    /// Ask until a non-blank line arrives; `None` at end of input
    fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        loop {
            write!(self.output, "{}", label)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            let answer = line.trim();
            if !answer.is_empty() {
                return Ok(Some(answer.to_string()));
            }
        }
    }

    fn read_choice(&mut self) -> AppResult<Option<MenuOption>> {
        loop {
            let Some(answer) = self.prompt("Enter your choice: ")? else {
                return Ok(None);
            };

            match MenuOption::from_choice(&answer) {
                Some(option) => return Ok(Some(option)),
                None => writeln!(
                    self.output,
                    "Invalid choice. Please enter a number between 0 and {}.",
                    MenuOption::max_number()
                )?,
            }
        }
    }

    /// `None` covers both end of input and a malformed id
    fn prompt_user_id(&mut self, label: &str) -> AppResult<Option<Uuid>> {
        let Some(answer) = self.prompt(label)? else {
            return Ok(None);
        };

        match Uuid::parse_str(&answer) {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                log::warn!("Rejected user id input '{}'", answer);
                writeln!(self.output, "Invalid User ID. Please enter a valid GUID.")?;
                Ok(None)
            }
        }
    }

    // ========================================================================
    // OUTPUT
    // ========================================================================

    fn show_menu(&mut self) -> AppResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "|__ Main Menu __|")?;
        writeln!(self.output)?;
        for option in MenuOption::ALL {
            writeln!(self.output, "{}", option)?;
        }
        Ok(())
    }

    fn print_title(&mut self, title: &str, subtitle: &str) -> AppResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "|__ {} __|", title)?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", subtitle)?;
        Ok(())
    }

    fn print_list<T: std::fmt::Display>(&mut self, items: &[T]) -> AppResult<()> {
        for item in items {
            writeln!(self.output, "{}", item)?;
        }
        Ok(())
    }

    // ========================================================================
    // BOOK HANDLERS
    // ========================================================================

    fn add_book(&mut self) -> AppResult<Flow> {
        self.print_title("Add New Book", "Enter the book information:")?;

        let Some(title) = self.prompt(" - Title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt(" - Author: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(isbn) = self.prompt(" - ISBN: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.prompt(" - Category: ")? else {
            return Ok(Flow::Exit);
        };

        let book = self.service.add_book(AddBookRequest {
            title,
            author,
            isbn,
            category,
        })?;

        writeln!(
            self.output,
            "Book '{}' by {} added successfully.",
            book.title, book.author
        )?;
        Ok(Flow::Continue)
    }

    fn remove_book(&mut self) -> AppResult<Flow> {
        self.print_title("Remove Book", "Enter the ISBN of the book to remove:")?;

        let Some(isbn) = self.prompt(" - ISBN: ")? else {
            return Ok(Flow::Exit);
        };

        self.service.remove_book(&isbn)?;

        writeln!(self.output, "Book with ISBN '{}' removed successfully.", isbn)?;
        Ok(Flow::Continue)
    }

    fn list_all_books(&mut self) -> AppResult<Flow> {
        let books = self.service.get_all_books()?;

        if books.is_empty() {
            self.print_title("List All Books", "No books found.")?;
        } else {
            self.print_title("List All Books", &format!("Found {} book(s):", books.len()))?;
            self.print_list(&books)?;
        }
        Ok(Flow::Continue)
    }

    fn search_books(&mut self) -> AppResult<Flow> {
        self.print_title("Search Books", "Enter the search term (title, author, or ISBN):")?;

        let Some(term) = self.prompt(" - Search Term: ")? else {
            return Ok(Flow::Exit);
        };

        let books = self.service.search_books(&term)?;

        if books.is_empty() {
            writeln!(self.output, "No books were found.")?;
        } else {
            writeln!(self.output, "Found {} book(s):", books.len())?;
            self.print_list(&books)?;
        }
        Ok(Flow::Continue)
    }

    fn change_book_status(&mut self) -> AppResult<Flow> {
        self.print_title(
            "Borrow Or Return A Book",
            "Enter the book's ISBN and the user ID (GUID):",
        )?;

        let Some(isbn) = self.prompt(" - ISBN: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(user_id) = self.prompt_user_id(" - User ID (GUID): ")? else {
            return Ok(Flow::Continue);
        };

        let message = match self.service.update_book_status(&isbn, user_id)? {
            BorrowTransition::Borrowed => format!("Book with ISBN '{}' is now borrowed.", isbn),
            BorrowTransition::Returned => format!("Book with ISBN '{}' has been returned.", isbn),
        };

        writeln!(self.output, "{}", message)?;
        Ok(Flow::Continue)
    }

    fn list_all_borrowed_books(&mut self) -> AppResult<Flow> {
        let users_with_books = self.service.get_all_users_with_borrowed_books()?;

        if users_with_books.is_empty() {
            self.print_title("List All Borrowed Books", "No borrowed books found.")?;
            return Ok(Flow::Continue);
        }

        self.print_title(
            "List All Borrowed Books",
            &format!(
                "Found {} user(s) with borrowed books:",
                users_with_books.len()
            ),
        )?;
        for entry in &users_with_books {
            writeln!(self.output, "{}", entry)?;
            writeln!(self.output)?;
        }

        let Some(answer) = self.prompt("Do you want to export the items to a file? (y/n): ")? else {
            return Ok(Flow::Exit);
        };

        if !answer.eq_ignore_ascii_case("y") {
            writeln!(self.output, "Export cancelled.")?;
            return Ok(Flow::Continue);
        }

        report::export_report(&self.report_path, &users_with_books)?;
        writeln!(
            self.output,
            "Items successfully exported to '{}'.",
            self.report_path.display()
        )?;
        Ok(Flow::Continue)
    }

    // ========================================================================
    // USER HANDLERS
    // ========================================================================

    fn add_user(&mut self) -> AppResult<Flow> {
        self.print_title("Add New User", "Enter the user information:")?;

        let Some(name) = self.prompt(" - Name: ")? else {
            return Ok(Flow::Exit);
        };

        let user = self.service.add_user(&name)?;

        writeln!(
            self.output,
            "User '{}' added successfully. Id: {}",
            user.name, user.id
        )?;
        Ok(Flow::Continue)
    }

    fn list_all_users(&mut self) -> AppResult<Flow> {
        let users = self.service.get_all_users()?;

        if users.is_empty() {
            self.print_title("List All Users", "No users found.")?;
        } else {
            self.print_title("List All Users", &format!("Found {} user(s):", users.len()))?;
            self.print_list(&users)?;
        }
        Ok(Flow::Continue)
    }

    fn list_borrowed_books_by_user(&mut self) -> AppResult<Flow> {
        let Some(user_id) = self.prompt_user_id("Enter User ID (GUID): ")? else {
            return Ok(Flow::Continue);
        };

        let user = self.service.get_user_by_id(user_id)?;
        let books = self.service.get_books_by_user_id(user.id)?;

        let subtitle = if books.is_empty() {
            format!("No books found for user {}.", user.name)
        } else {
            format!("Found {} book(s) borrowed by {}:", books.len(), user.name)
        };
        self.print_title("List Books Borrowed By A User", &subtitle)?;
        self.print_list(&books)?;
        Ok(Flow::Continue)
    }
}
