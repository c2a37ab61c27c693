use std::sync::LazyLock;
use std::vec::IntoIter;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME: LazyLock<Option<Theme>> =
    LazyLock::new(|| ThemeSet::load_defaults().themes.remove("base16-ocean.dark"));

/// Rewrites fenced code blocks in a pulldown-cmark event stream into
/// pre-highlighted HTML. Blocks whose language is unknown, or that fail to
/// highlight, pass through as plain code blocks.
pub fn highlight<'a, It>(events: It) -> IntoIter<Event<'a>>
where
    It: Iterator<Item = Event<'a>>,
{
    let mut in_code_block = false;
    let mut syntax = SYNTAXES.find_syntax_plain_text();
    let mut buffer = String::new();
    let mut out = Vec::new();
    let mut pending: Vec<Event<'a>> = Vec::new();

    for event in events {
        match event {
            Event::Start(Tag::CodeBlock(ref kind)) => {
                if let CodeBlockKind::Fenced(lang) = kind {
                    syntax = SYNTAXES
                        .find_syntax_by_token(lang)
                        .unwrap_or_else(|| SYNTAXES.find_syntax_plain_text());
                }
                in_code_block = true;
                pending.push(event);
            }
            Event::End(TagEnd::CodeBlock) if in_code_block => {
                in_code_block = false;
                let rendered = THEME.as_ref().and_then(|theme| {
                    highlighted_html_for_string(&buffer, &SYNTAXES, syntax, theme).ok()
                });
                match rendered {
                    Some(html) => {
                        pending.clear();
                        out.push(Event::Html(CowStr::from(html)));
                    }
                    None => {
                        // Fall back to the untouched code block.
                        out.append(&mut pending);
                        out.push(Event::Text(CowStr::from(buffer.clone())));
                        out.push(Event::End(TagEnd::CodeBlock));
                    }
                }
                buffer.clear();
            }
            Event::Text(t) if in_code_block => buffer.push_str(&t),
            e => out.push(e),
        }
    }

    out.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::Parser;

    #[test]
    fn fenced_blocks_become_html() {
        let md = "hello\n\n```rust\nfn main() {}\n```\n";
        let events = highlight(Parser::new(md)).collect::<Vec<_>>();
        assert!(events
            .iter()
            .any(|e| matches!(e, Event::Html(h) if h.contains("<pre"))));
        // The raw code block must not survive alongside the rendered HTML.
        assert!(!events
            .iter()
            .any(|e| matches!(e, Event::Start(Tag::CodeBlock(_)))));
    }

    #[test]
    fn prose_passes_through() {
        let md = "just *some* text";
        let highlighted = highlight(Parser::new(md)).collect::<Vec<_>>();
        let plain = Parser::new(md).collect::<Vec<_>>();
        assert_eq!(highlighted, plain);
    }
}
