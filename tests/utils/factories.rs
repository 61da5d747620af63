use bookscout_lib::modules::catalog::domain::{BookDetails, BookSummary, ResultPage};
use bookscout_lib::modules::likes::LikedBook;

/// Builder for catalog books used across tests
#[derive(Debug, Clone)]
pub struct BookFactory {
    id: String,
    title: String,
    authors: Vec<String>,
    thumbnail_url: Option<String>,
    description: Option<String>,
    published_date: Option<String>,
    publisher: Option<String>,
    page_count: Option<u32>,
    language: Option<String>,
    categories: Vec<String>,
}

impl Default for BookFactory {
    fn default() -> Self {
        Self {
            id: format!("vol-{}", rand::random::<u32>() % 1_000_000),
            title: "Test Book".to_string(),
            authors: vec!["Test Author".to_string()],
            thumbnail_url: None,
            description: None,
            published_date: None,
            publisher: None,
            page_count: None,
            language: None,
            categories: Vec::new(),
        }
    }
}

impl BookFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn complete() -> Self {
        Self::default()
            .with_title("The Hobbit")
            .with_authors(vec!["J.R.R. Tolkien"])
            .with_thumbnail("https://books.google.com/books/content?id=hobbit")
            .with_description("In a hole in the ground there lived a hobbit.")
            .with_published_date("1937-09-21")
            .with_publisher("George Allen & Unwin")
            .with_page_count(310)
            .with_language("en")
            .with_categories(vec!["Fantasy"])
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_authors(mut self, authors: Vec<&str>) -> Self {
        self.authors = authors.into_iter().map(str::to_string).collect();
        self
    }

    pub fn with_thumbnail(mut self, url: &str) -> Self {
        self.thumbnail_url = Some(url.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_published_date(mut self, date: &str) -> Self {
        self.published_date = Some(date.to_string());
        self
    }

    pub fn with_publisher(mut self, publisher: &str) -> Self {
        self.publisher = Some(publisher.to_string());
        self
    }

    pub fn with_page_count(mut self, pages: u32) -> Self {
        self.page_count = Some(pages);
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn with_categories(mut self, categories: Vec<&str>) -> Self {
        self.categories = categories.into_iter().map(str::to_string).collect();
        self
    }

    pub fn build_summary(self) -> BookSummary {
        BookSummary {
            id: self.id,
            title: self.title,
            authors: self.authors,
            thumbnail_url: self.thumbnail_url,
        }
    }

    pub fn build_details(self) -> BookDetails {
        BookDetails {
            id: self.id,
            title: self.title,
            authors: self.authors,
            thumbnail_url: self.thumbnail_url,
            description: self.description,
            published_date: self.published_date,
            publisher: self.publisher,
            page_count: self.page_count,
            language: self.language,
            categories: self.categories,
        }
    }

    pub fn build_liked(self) -> LikedBook {
        LikedBook::from(&self.build_summary())
    }
}

/// `count` books titled `"{prefix} {n}"` with ids `"{prefix}-{n}"`, starting at `start`
pub fn numbered_books(prefix: &str, start: usize, count: usize) -> Vec<BookSummary> {
    (start..start + count)
        .map(|n| {
            BookFactory::new()
                .with_id(&format!("{}-{}", prefix, n))
                .with_title(&format!("{} {}", prefix, n))
                .build_summary()
        })
        .collect()
}

/// A result page holding `count` numbered books out of `total`
pub fn page_of(prefix: &str, start: usize, count: usize, total: u64, page_size: u32) -> ResultPage {
    ResultPage::new(numbered_books(prefix, start, count), total, page_size)
}
