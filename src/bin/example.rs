use std::io::Write;

use anyhow::{Result, Context};
use clap::Parser as ClapParser;
use serde::Deserialize;
use thtml::dom_template::{self, Template, Value};
use thtml::{html, warn, PrintHtml, RenderTarget};

const DOCTYPE: &str = "<!DOCTYPE html>\n";

#[derive(clap::Parser, Debug)]
/// Render a few example templates into mock bodies and print the
/// resulting HTML.
struct Args {
    /// Title of the example page
    #[clap(long, default_value = "Hello Templates")]
    title: String,

    /// Body text of the example page
    #[clap(long, default_value = "abc")]
    body: String,

    /// Cards to show, as JSON: `[{"title": "..", "content": ".."}, ..]`
    #[clap(long)]
    cards_json: Option<String>,

    /// Print the first page as a complete document to stdout, then
    /// exit
    #[clap(long)]
    doctype: bool,
}

#[derive(Deserialize, Debug)]
struct Card {
    title: String,
    content: String,
}

fn page(title: &str, body: &str) -> Template {
    html!("
  <h1>", title, "</h1>
  <p>", body, "</p>
")
}

fn card(card: &Card) -> Template {
    html!("
  <div class=\"card\">
    <h2>", &card.title, "</h2>
    <div class=\"content\">", &card.content, "</div>
  </div>
")
}

fn page_with_cards(cards: impl Into<Value>) -> Template {
    html!("
  <div class=\"container\">
    ", cards, "
  </div>
")
}

fn default_cards() -> Vec<Card> {
    (1..=3).map(|i| Card {
        title: format!("Card {i}"),
        content: format!("Content for card {i}"),
    }).collect()
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.doctype {
        let mut out = std::io::stdout().lock();
        out.write_all(DOCTYPE.as_bytes())?;
        html!("<html><body>", page(&args.title, &args.body), "</body></html>\n")
            .print_html(&mut out)?;
        return Ok(())
    }

    let cards = match &args.cards_json {
        Some(s) => serde_json::from_str::<Vec<Card>>(s).with_context(
            || format!("parsing --cards-json {s:?}"))?,
        None => default_cards()
    };
    if cards.is_empty() {
        warn!("no cards given");
    }

    println!("=== SSR HTML Template Example ===\n");

    let mut body = dom_template::create_mock_body();

    body.render(&page(&args.title, &args.body));
    println!("First render:");
    println!("{}", body.inner_html);
    println!();

    body.render(&page("Hello Updates", "def"));
    println!("Second render:");
    println!("{}", body.inner_html());
    println!();

    println!("=== Additional Examples ===\n");

    let mut cards_body = dom_template::create_mock_body();
    cards_body.render(&page_with_cards(
        cards.iter().map(card).collect::<Vec<_>>()));
    println!("Nested templates with array:");
    println!("{}", cards_body.inner_html);
    println!();

    let user_input = "<script>alert(\"XSS\")</script>";
    let safe_page = html!("
  <div>User input: ", user_input, "</div>
");
    let mut safe_body = dom_template::create_mock_body();
    safe_body.render(&safe_page);
    println!("HTML escaping (preventing XSS):");
    println!("{}", safe_body.inner_html);
    println!();

    let direct = dom_template::render_to_string(
        &page("Direct Render", "No body object needed"));
    println!("Direct string rendering:");
    println!("{direct}");
    println!();

    println!("=== Functional Programming Example ===\n");
    let mut body = dom_template::create_mock_body();
    {
        let mut render_to_body = dom_template::create_renderer(&mut body);
        render_to_body(&page("Curried Render", "Using functional composition"));
    }
    println!("Curried renderer:");
    println!("{}", body.inner_html);

    Ok(())
}
