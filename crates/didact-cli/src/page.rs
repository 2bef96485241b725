//! Full-page HTML composition.
//!
//! Wraps rendered document nodes in the site shell: header with search
//! form, footer, breadcrumb trail, the course-contents side panel and the
//! in-page section nav. Everything is built through didact-core's element
//! tree, so page chrome gets the same escaping guarantees as document
//! content.

use chrono::{DateTime, Utc};
use didact_core::{
    Blog, Category, Element, ImagePolicy, Node, Outline, ResultKind, SearchResult, SideNavPin,
    Tutorial, render_blocks_with,
};

const SITE_NAME: &str = "Didact";
const STYLESHEET_HREF: &str = "/assets/didact.css";

/// Wrap a page body in the document shell: head, sticky header, footer.
fn document(title: &str, main: Element) -> String {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text(format!("{title} | {SITE_NAME}")))
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", STYLESHEET_HREF),
        );

    let body = Element::new("body")
        .class("min-h-screen bg-white flex flex-col")
        .child(site_header())
        .child(main)
        .child(site_footer());

    let html = Element::new("html")
        .attr("lang", "en")
        .child(head)
        .child(body);

    format!("<!DOCTYPE html>\n{}", Node::from(html).to_html())
}

fn site_header() -> Element {
    let logo = Element::new("a")
        .attr("href", "/")
        .class("flex items-center space-x-2 hover:opacity-80 transition-opacity")
        .child(
            Element::new("div")
                .class("w-8 h-8 bg-accent rounded-lg flex items-center justify-center")
                .child(
                    Element::new("span")
                        .class("text-white font-bold text-lg")
                        .text("D"),
                ),
        )
        .child(Element::new("span").class("font-bold text-xl").text(SITE_NAME));

    let nav = Element::new("nav")
        .class("hidden md:flex items-center space-x-6")
        .child(nav_link("/tutorials", "Tutorials"))
        .child(nav_link("/blog", "Blog"));

    let search = Element::new("form")
        .attr("action", "/search")
        .attr("method", "get")
        .class("flex items-center")
        .child(
            Element::new("input")
                .attr("type", "text")
                .attr("name", "q")
                .attr("placeholder", "Search...")
                .class("input w-48 sm:w-64 pl-10 pr-4 py-2 text-sm"),
        );

    Element::new("header")
        .class("sticky top-0 z-50 w-full border-b border-gray-200 bg-white/95 backdrop-blur")
        .child(
            Element::new("div")
                .class("container mx-auto px-4 sm:px-6 lg:px-8")
                .child(
                    Element::new("div")
                        .class("flex h-16 items-center justify-between")
                        .child(logo)
                        .child(nav)
                        .child(search),
                ),
        )
}

fn nav_link(href: &'static str, label: &'static str) -> Element {
    Element::new("a")
        .attr("href", href)
        .class("flex items-center space-x-1 text-sm font-medium transition-colors hover:text-accent text-gray-700")
        .text(label)
}

fn site_footer() -> Element {
    let brand = Element::new("div")
        .child(Element::new("span").class("font-bold text-xl").text(SITE_NAME))
        .child(
            Element::new("p")
                .class("text-sm text-gray-600 leading-relaxed mt-4")
                .text("Learn programming through structured tutorials and insightful blog posts."),
        );

    let links = Element::new("ul").class("space-y-3").children(
        [("/tutorials", "Tutorials"), ("/blog", "Blog"), ("/search", "Search")]
            .into_iter()
            .map(|(href, label)| {
                Element::new("li")
                    .child(
                        Element::new("a")
                            .attr("href", href)
                            .class("text-sm text-gray-600 hover:text-accent transition-colors")
                            .text(label),
                    )
                    .into()
            }),
    );

    Element::new("footer")
        .class("border-t border-gray-200 bg-gray-50 mt-auto")
        .child(
            Element::new("div")
                .class("container mx-auto px-4 sm:px-6 lg:px-8 py-12")
                .child(
                    Element::new("div")
                        .class("grid grid-cols-1 md:grid-cols-4 gap-8")
                        .child(brand)
                        .child(
                            Element::new("div")
                                .child(
                                    Element::new("h3")
                                        .class("font-semibold text-gray-900 mb-4")
                                        .text("Quick Links"),
                                )
                                .child(links),
                        ),
                ),
        )
}

fn breadcrumb(category: Option<&Category>, current: &str) -> Element {
    let mut nav = Element::new("nav")
        .class("flex items-center gap-2 text-sm mb-8")
        .child(
            Element::new("a")
                .attr("href", "/tutorials")
                .class("text-gray-600 hover:text-accent transition-colors")
                .text("Tutorials"),
        )
        .child(Element::new("span").class("text-gray-400").text("/"));

    if let Some(category) = category {
        nav = nav
            .child(
                Element::new("a")
                    .attr("href", format!("/tutorials/{}", category.slug))
                    .class("text-gray-600 hover:text-accent transition-colors")
                    .text(category.name.clone()),
            )
            .child(Element::new("span").class("text-gray-400").text("/"));
    }

    nav.child(
        Element::new("span")
            .class("text-gray-900 font-medium")
            .text(current),
    )
}

/// The fixed right-rail section nav. `None` when the outline is not worth
/// showing — fewer than two sections renders no nav at all.
fn section_nav(outline: &Outline) -> Option<Element> {
    if !outline.is_navigable() {
        return None;
    }

    let entries = outline.sections.iter().map(|section| {
        let size = if section.level == 3 { "text-sm opacity-60" } else { "text-base" };
        Element::new("a")
            .attr("href", format!("#{}", section.id))
            .class(format!(
                "group relative flex items-center justify-end py-2 {size}"
            ))
            .attr("data-section", section.id.clone())
            .text(section.title.clone())
            .into()
    });

    Some(
        Element::new("nav")
            .class("fixed right-8 top-1/2 -translate-y-1/2 hidden xl:block z-30")
            .attr("data-section-nav", "")
            .child(Element::new("div").class("flex flex-col gap-3").children(entries)),
    )
}

/// The course-contents side panel: breadcrumb pinned on top, scrollable
/// tutorial list below, viewport-pinned until the footer scrolls into view.
fn side_nav(
    category: &Category,
    tutorials: &[Tutorial],
    current_slug: &str,
    current_title: &str,
    pin: SideNavPin,
) -> Element {
    let pin_class = match pin {
        SideNavPin::Fixed => "fixed top-20",
        SideNavPin::DocumentRelative => "absolute bottom-0",
    };

    let items = tutorials.iter().map(|tutorial| {
        let active = tutorial.slug == current_slug;
        let item_class = if active {
            "block p-3 rounded-lg transition-all bg-accent text-white shadow-sm"
        } else {
            "block p-3 rounded-lg transition-all hover:bg-gray-100 text-gray-700"
        };

        let mut body = Element::new("div")
            .class("flex items-start gap-3")
            .child(
                Element::new("span")
                    .class("shrink-0 w-6 h-6 rounded-full flex items-center justify-center text-xs font-bold bg-gray-200 text-gray-600")
                    .text(tutorial.order.to_string()),
            );
        let mut text = Element::new("div")
            .class("flex-1 min-w-0")
            .child(
                Element::new("p")
                    .class("text-sm font-medium")
                    .text(tutorial.title.clone()),
            );
        if let Some(minutes) = tutorial.reading_time {
            text = text.child(
                Element::new("p")
                    .class("text-xs mt-1 text-gray-500")
                    .text(format!("{minutes} min")),
            );
        }
        body = body.child(text);

        Element::new("a")
            .attr("href", format!("/tutorials/{}/{}", category.slug, tutorial.slug))
            .class(item_class)
            .child(body)
            .into()
    });

    Element::new("nav")
        .class(format!(
            "w-80 h-[calc(100vh-5rem)] bg-white rounded-lg border-2 border-accent/20 shadow-lg overflow-hidden flex flex-col {pin_class}"
        ))
        .attr("data-side-nav", "")
        .child(
            Element::new("div")
                .class("p-6 pb-4 border-b-2 border-accent/20 shrink-0")
                .child(breadcrumb(Some(category), current_title)),
        )
        .child(
            Element::new("div")
                .class("flex-1 overflow-y-auto p-6 pt-4 bg-gray-50")
                .child(
                    Element::new("h3")
                        .class("text-lg font-bold mb-4 text-gray-900")
                        .text("Course Contents"),
                )
                .child(Element::new("div").class("space-y-2").children(items)),
        )
}

/// A complete tutorial reading page.
pub fn tutorial_page(tutorial: &Tutorial, siblings: &[Tutorial], images: &ImagePolicy) -> String {
    let outline = Outline::extract(&tutorial.content);
    let category = &tutorial.category;

    let mut meta = Element::new("div")
        .class("flex flex-wrap items-center gap-4 text-sm text-gray-600");
    if let Some(minutes) = tutorial.reading_time {
        meta = meta.child(
            Element::new("span").text(format!("{minutes} min read")),
        );
    }
    meta = meta
        .child(Element::new("span").text(format!("Updated {}", format_date(tutorial.updated_at))))
        .child(
            Element::new("a")
                .attr("href", format!("/tutorials/{}", category.slug))
                .class("px-3 py-1 bg-accent/10 text-accent rounded-full font-medium hover:bg-accent/20 transition-colors")
                .text(category.name.clone()),
        );

    let article_header = Element::new("header")
        .class("mb-12 pb-8 border-b-2 border-gray-200")
        .child(
            Element::new("h1")
                .class("text-4xl sm:text-5xl font-bold mb-4 leading-tight")
                .text(tutorial.title.clone()),
        )
        .child(
            Element::new("p")
                .class("text-xl text-gray-700 mb-6 leading-relaxed")
                .text(tutorial.summary.clone()),
        )
        .child(meta);

    let content = Element::new("div")
        .class("prose prose-lg max-w-none mb-16")
        .children(render_blocks_with(&tutorial.content, images));

    let mut article = Element::new("article")
        .class("container mx-auto px-4 sm:px-6 lg:px-8 py-8")
        .child(
            Element::new("div")
                .class("max-w-4xl mx-auto")
                .child(breadcrumb(Some(category), &tutorial.title))
                .child(article_header)
                .child(content),
        );

    if let Some(nav) = section_nav(&outline) {
        article = article.child(nav);
    }

    let mut main = Element::new("main").class("min-h-screen bg-white relative");
    if !siblings.is_empty() {
        main = main.child(side_nav(
            category,
            siblings,
            &tutorial.slug,
            &tutorial.title,
            SideNavPin::Fixed,
        ));
    }
    main = main.child(article);

    document(&tutorial.title, main)
}

/// A complete blog post page.
pub fn blog_page(blog: &Blog, images: &ImagePolicy) -> String {
    let article_header = Element::new("header")
        .class("mb-12 pb-8 border-b-2 border-gray-200")
        .child(
            Element::new("h1")
                .class("text-4xl sm:text-5xl font-bold mb-4 leading-tight")
                .text(blog.title.clone()),
        )
        .child(
            Element::new("p")
                .class("text-xl text-gray-700 mb-6 leading-relaxed")
                .text(blog.summary.clone()),
        )
        .child(
            Element::new("div")
                .class("text-sm text-gray-600")
                .text(format!("Updated {}", format_date(blog.updated_at))),
        );

    let main = Element::new("main").class("min-h-screen bg-white").child(
        Element::new("article")
            .class("container mx-auto px-4 sm:px-6 lg:px-8 py-8")
            .child(
                Element::new("div")
                    .class("max-w-4xl mx-auto")
                    .child(article_header)
                    .child(
                        Element::new("div")
                            .class("prose prose-lg max-w-none mb-16")
                            .children(render_blocks_with(&blog.content, images)),
                    ),
            ),
    );

    document(&blog.title, main)
}

/// The blog index: published posts, newest first.
pub fn blog_index_page(blogs: &[Blog]) -> String {
    let cards: Vec<Node> = blogs
        .iter()
        .map(|blog| {
            Element::new("a")
                .attr("href", format!("/blog/{}", blog.slug))
                .class("card group hover:border-accent hover:shadow-lg transition-all block")
                .child(
                    Element::new("h3")
                        .class("text-2xl font-bold group-hover:text-accent transition-colors mb-2")
                        .text(blog.title.clone()),
                )
                .child(
                    Element::new("p")
                        .class("text-gray-700 leading-relaxed mb-3")
                        .text(blog.summary.clone()),
                )
                .child(
                    Element::new("span")
                        .class("text-sm text-gray-500")
                        .text(format_date(blog.updated_at)),
                )
                .into()
        })
        .collect();

    let body = if cards.is_empty() {
        Element::new("div")
            .class("max-w-2xl mx-auto text-center py-12")
            .child(
                Element::new("p")
                    .class("text-gray-600 text-lg")
                    .text("No blog posts yet. Check back soon!"),
            )
    } else {
        Element::new("div")
            .class("grid grid-cols-1 md:grid-cols-2 gap-6 max-w-5xl mx-auto")
            .children(cards)
    };

    let main = Element::new("main").class("min-h-screen bg-white").child(
        Element::new("section")
            .class("container mx-auto px-4 sm:px-6 lg:px-8 py-16")
            .child(
                Element::new("h1")
                    .class("text-4xl sm:text-5xl font-bold mb-12 text-center")
                    .text("Blog"),
            )
            .child(body),
    );

    document("Blog", main)
}

/// A category's tutorial listing page.
pub fn category_page(category: &Category, tutorials: &[Tutorial]) -> String {
    let mut hero = Element::new("div")
        .class("max-w-4xl mx-auto text-center")
        .child(
            Element::new("h1")
                .class("text-4xl sm:text-5xl font-bold mb-4")
                .text(category.name.clone()),
        );
    if let Some(description) = &category.description {
        hero = hero.child(
            Element::new("p")
                .class("text-xl text-gray-700")
                .text(description.clone()),
        );
    }

    let items = tutorials.iter().map(|tutorial| {
        let mut card = Element::new("a")
            .attr("href", format!("/tutorials/{}/{}", category.slug, tutorial.slug))
            .class("card group hover:border-accent hover:shadow-lg transition-all block")
            .child(
                Element::new("div")
                    .class("flex items-start gap-4")
                    .child(
                        Element::new("span")
                            .class("shrink-0 w-8 h-8 rounded-full flex items-center justify-center text-sm font-bold bg-accent/10 text-accent")
                            .text(tutorial.order.to_string()),
                    )
                    .child(
                        Element::new("div")
                            .child(
                                Element::new("h3")
                                    .class("text-xl font-bold group-hover:text-accent transition-colors")
                                    .text(tutorial.title.clone()),
                            )
                            .child(
                                Element::new("p")
                                    .class("text-gray-700 leading-relaxed mt-1")
                                    .text(tutorial.summary.clone()),
                            ),
                    ),
            );
        if let Some(minutes) = tutorial.reading_time {
            card = card.child(
                Element::new("span")
                    .class("text-xs text-gray-500 mt-2 block")
                    .text(format!("{minutes} min")),
            );
        }
        card.into()
    });

    let main = Element::new("main")
        .class("min-h-screen bg-white")
        .child(
            Element::new("section")
                .class("bg-gray-50 py-16")
                .child(
                    Element::new("div")
                        .class("container mx-auto px-4 sm:px-6 lg:px-8")
                        .child(hero),
                ),
        )
        .child(
            Element::new("section")
                .class("container mx-auto px-4 sm:px-6 lg:px-8 py-16")
                .child(
                    Element::new("div")
                        .class("max-w-3xl mx-auto space-y-4")
                        .children(items),
                ),
        );

    document(&category.name, main)
}

/// The search-results page, covering the query-too-short, empty and
/// results states.
pub fn search_page(query: &str, results: &[SearchResult]) -> String {
    let body = if query.trim().chars().count() < didact_core::MIN_SEARCH_QUERY_CHARS {
        Element::new("div")
            .class("text-center py-12")
            .child(
                Element::new("p")
                    .class("text-gray-600 text-lg")
                    .text("Enter a search query to find tutorials and blog posts"),
            )
            .child(
                Element::new("p")
                    .class("text-gray-500 text-sm mt-2")
                    .text("Minimum 2 characters required"),
            )
    } else if results.is_empty() {
        Element::new("div").class("text-center py-12").child(
            Element::new("p")
                .class("text-gray-600 text-lg")
                .text(format!("No results found for \"{query}\"")),
        )
    } else {
        Element::new("div")
            .class("space-y-4")
            .children(results.iter().map(|result| search_result_card(result)))
    };

    let mut hero = Element::new("div")
        .class("container mx-auto px-4 sm:px-6 lg:px-8 max-w-4xl")
        .child(
            Element::new("h1")
                .class("text-3xl sm:text-4xl font-bold mb-6")
                .text("Search Results"),
        );
    if query.trim().chars().count() >= didact_core::MIN_SEARCH_QUERY_CHARS {
        hero = hero.child(Element::new("p").class("text-lg text-gray-700").text(format!(
            "Found {} result{} for \"{query}\"",
            results.len(),
            if results.len() == 1 { "" } else { "s" },
        )));
    }

    let main = Element::new("main")
        .class("min-h-screen bg-white")
        .child(
            Element::new("section")
                .class("bg-gray-50 py-12 border-b border-gray-200")
                .child(hero),
        )
        .child(
            Element::new("section")
                .class("container mx-auto px-4 sm:px-6 lg:px-8 py-12 max-w-4xl")
                .child(body),
        );

    document("Search", main)
}

fn search_result_card(result: &SearchResult) -> Node {
    let (href, tag) = match result.kind {
        ResultKind::Tutorial => {
            let category_slug = result
                .category
                .as_ref()
                .map_or("", |category| category.slug.as_str());
            (format!("/tutorials/{category_slug}/{}", result.slug), "Tutorial")
        },
        ResultKind::Blog => (format!("/blog/{}", result.slug), "Blog"),
    };

    Element::new("a")
        .attr("href", href)
        .class("card group hover:border-accent hover:shadow-lg transition-all block")
        .child(
            Element::new("span")
                .class("text-xs font-semibold text-accent uppercase tracking-wide")
                .text(tag),
        )
        .child(
            Element::new("h3")
                .class("text-xl font-bold group-hover:text-accent transition-colors mt-1")
                .text(result.title.clone()),
        )
        .child(
            Element::new("p")
                .class("text-gray-700 leading-relaxed mt-1")
                .text(result.summary.clone()),
        )
        .into()
}

/// The not-found page shown when a requested document does not exist.
pub fn not_found_page(what: &str) -> String {
    let main = Element::new("main").class("min-h-screen bg-white").child(
        Element::new("div")
            .class("container mx-auto px-4 py-24 text-center")
            .child(Element::new("h1").class("text-5xl font-bold mb-4").text("404"))
            .child(
                Element::new("p")
                    .class("text-xl text-gray-700")
                    .text(format!("{what} was not found.")),
            )
            .child(
                Element::new("a")
                    .attr("href", "/")
                    .class("inline-block mt-8 text-accent hover:text-accent-dark underline")
                    .text("Back to the homepage"),
            ),
    );

    document("Not Found", main)
}

fn format_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}
