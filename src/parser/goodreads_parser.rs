// Goodreads-specific HTML parsing
use crate::model::{ParserError, Quote};
use crate::normalizer::{normalize_author, normalize_quote};
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

const QUOTE_BLOCK: &str = "div.quoteText";
const AUTHOR_OR_TITLE: &str = ".authorOrTitle";

pub trait Parser {
    /// Extracts every quote on a listing page; `url` becomes each quote's link.
    fn parse(&self, html: &str, url: &str) -> Result<Vec<Quote>, ParserError>;
}

/// One child of a quote block, before trimming and joining.
enum Fragment<'a> {
    /// An element; contributes its visible text.
    Text(ElementRef<'a>),
    /// A bare text or comment node.
    Raw(&'a str),
}

impl Fragment<'_> {
    fn text(&self) -> String {
        match self {
            Fragment::Text(element) => element.text().collect::<String>().trim().to_string(),
            Fragment::Raw(raw) => raw.trim().to_string(),
        }
    }
}

pub struct GoodreadsParser;

impl GoodreadsParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GoodreadsParser {
    fn default() -> Self {
        Self::new()
    }
}

fn selector(css: &str) -> Result<Selector, ParserError> {
    Selector::parse(css).map_err(|e| ParserError::InvalidSelector(e.to_string()))
}

impl Parser for GoodreadsParser {
    fn parse(&self, html: &str, url: &str) -> Result<Vec<Quote>, ParserError> {
        let document = Html::parse_document(html);

        let block_selector = selector(QUOTE_BLOCK)?;
        let author_selector = selector(AUTHOR_OR_TITLE)?;

        let mut quotes = Vec::new();

        for block in document.select(&block_selector) {
            let children: Vec<_> = block.children().collect();
            // the last child holds the attribution markup
            let body = children.split_last().map(|(_, rest)| rest).unwrap_or_default();

            let fragments: Vec<String> = body
                .iter()
                .filter_map(|child| match child.value() {
                    Node::Element(_) => ElementRef::wrap(*child).map(Fragment::Text),
                    Node::Text(text) => Some(Fragment::Raw(&**text)),
                    Node::Comment(comment) => Some(Fragment::Raw(&**comment)),
                    _ => None,
                })
                .map(|fragment| fragment.text())
                .collect();

            let author = block
                .select(&author_selector)
                .next()
                .and_then(|node| node.first_child())
                .map(|first| match first.value() {
                    Node::Text(text) => String::from(&**text),
                    Node::Element(_) => ElementRef::wrap(first)
                        .map(|el| el.text().collect::<String>())
                        .unwrap_or_default(),
                    _ => String::new(),
                })
                .unwrap_or_default();

            quotes.push(Quote::new(normalize_quote(&fragments), normalize_author(&author), url));
        }

        Ok(quotes)
    }
}
