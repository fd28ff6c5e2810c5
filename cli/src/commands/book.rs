use biblio_common::config::Config;
use biblio_common::records::Book;
use biblio_core::Library;

use crate::commands::BookCommand;
use crate::terminal::{format, print};

pub fn book(command: BookCommand, library: &mut Library, cfg: &Config) -> biblio_common::Result<()> {
    match command {
        BookCommand::Add { title, author, pages } => {
            let book = Book::new(&title, &author, pages)?;
            library.insert_book(&book)?;
            print::print_status(format!("Catalogued {book}"));
        }
        BookCommand::Find(book) => match library.search_book(&book.to_probe()?) {
            Some(found) => print_books(&[found], cfg),
            None => print::no_results("book"),
        },
        BookCommand::Remove(book) => {
            library.delete_book(&book.to_probe()?)?;
            print::print_status(format!("Removed \"{}\" by {}", book.title, book.author));
        }
        BookCommand::List => {
            let books = library.books();
            print::header("catalogue", cfg.quiet);
            print_books(&books, cfg);
            print::summary(books.len(), "book", cfg);
        }
    }
    Ok(())
}

fn print_books(books: &[Book], cfg: &Config) {
    if books.is_empty() {
        print::no_results("books");
        return;
    }
    if cfg.quiet > 1 {
        return;
    }

    for (idx, book) in books.iter().enumerate() {
        print::tree_head(idx, book.title());
        print::as_tree_one_level(format::book_to_details(book));
    }
}
