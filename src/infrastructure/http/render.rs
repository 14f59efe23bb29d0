//! HTML Rendering
//!
//! 服务端渲染页面。所有动态内容经 html-escape 转义，
//! 链接中的路径片段经 urlencoding 编码。

use crate::application::ports::{BookRecord, ReviewLookup};
use crate::application::BookListing;
use crate::domain::book::display_list;

fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// 属性值转义：encode_text 不转义双引号，放进 href="..." 必须用这个
fn escape_attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// 页面骨架
fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"/styles.css\">\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n",
        title = escape(title),
        body = body
    )
}

/// 首页：字母/数字索引
pub fn index_page() -> String {
    let mut links = String::new();
    for c in ('A'..='Z').chain('0'..='9') {
        links.push_str(&format!(
            "<a class=\"index-link\" href=\"/getBook/{c}\">{c}</a>\n"
        ));
    }

    let body = format!(
        "<h1>Book Catalog</h1>\n\
         <p>Browse books by the first character of their title.</p>\n\
         <nav class=\"index\">\n{links}</nav>"
    );
    layout("Book Catalog", &body)
}

/// 列表页：一页标题及上一页/下一页导航
pub fn listing_page(listing: &BookListing) -> String {
    let prefix = &listing.prefix;
    let mut body = format!("<h1>Titles starting with {}</h1>\n", escape(prefix));

    if listing.has_results() {
        body.push_str("<ul class=\"books\">\n");
        for book in &listing.books {
            body.push_str(&format!(
                "<li><a href=\"/getBookDetail/{}\">{}</a></li>\n",
                book.book_id,
                escape(&book.title)
            ));
        }
        body.push_str("</ul>\n");
    } else {
        body.push_str(&format!(
            "<p>No books found starting with {}.</p>\n",
            escape(prefix)
        ));
    }

    body.push_str("<nav class=\"pager\">\n");
    if listing.window.offset > 0 {
        body.push_str(&format!(
            "<a class=\"prev\" href=\"/getBook/{}?offset={}\">Previous</a>\n",
            encode(prefix),
            listing.window.prev_offset()
        ));
    }
    if listing.window.has_next() {
        body.push_str(&format!(
            "<a class=\"next\" href=\"/getBook/{}?offset={}\">Next</a>\n",
            encode(prefix),
            listing.window.next_offset()
        ));
    }
    body.push_str("</nav>\n<p><a href=\"/\">Back to index</a></p>");

    layout(&format!("Titles - {}", prefix), &body)
}

/// 详情页：人类可读投影（逗号连接的作者/类型）
pub fn detail_page(book: &BookRecord) -> String {
    let body = format!(
        "<h1>{title}</h1>\n\
         <dl class=\"book-detail\">\n\
         <dt>Authors</dt><dd>{authors}</dd>\n\
         <dt>Genres</dt><dd>{genres}</dd>\n\
         <dt>Pages</dt><dd>{pages}</dd>\n\
         <dt>Rating</dt><dd>{rating} ({rating_count} ratings)</dd>\n\
         </dl>\n\
         <p class=\"summary\">{summary}</p>\n\
         <p><a href=\"/getBookReview/{title_enc}/{author_enc}\">Look up reviews</a></p>",
        title = escape(&book.title),
        authors = escape(&display_list(&book.authors)),
        genres = escape(&display_list(&book.genres)),
        pages = book.pages,
        rating = book.rating,
        rating_count = book.rating_count,
        summary = escape(&book.summary),
        title_enc = encode(&book.title),
        author_enc = encode(&display_list(&book.authors)),
    );
    layout(&book.title, &body)
}

/// 书评页：版权声明 + 按远端顺序排列的书评
pub fn review_page(lookup: &ReviewLookup) -> String {
    let mut body = String::from("<h1>Book Reviews</h1>\n");
    for review in &lookup.reviews {
        body.push_str("<article class=\"review\">\n");
        body.push_str(&format!(
            "<h2>{} by {}</h2>\n",
            escape(&review.book_title),
            escape(&review.book_author)
        ));
        if !review.byline.is_empty() {
            body.push_str(&format!("<p class=\"byline\">{}</p>\n", escape(&review.byline)));
        }
        if !review.summary.is_empty() {
            body.push_str(&format!("<p>{}</p>\n", escape(&review.summary)));
        }
        if !review.url.is_empty() {
            body.push_str(&format!(
                "<p><a href=\"{}\">Read the full review</a></p>\n",
                escape_attr(&review.url)
            ));
        }
        body.push_str("</article>\n");
    }
    body.push_str(&format!(
        "<footer class=\"copyright\">{}</footer>",
        escape(&lookup.copyright)
    ));
    layout("Book Reviews", &body)
}

/// 无书评页（404 响应体）
pub fn no_reviews_page(title: &str, author: &str) -> String {
    let body = format!(
        "<h1>No Book Review Found for Title: {} and Author: {}</h1>\n\
         <p><a href=\"/\">Back to index</a></p>",
        escape(title),
        escape(author)
    );
    layout("No Reviews Found", &body)
}

/// 通用 404 页
pub fn not_found_page() -> String {
    layout(
        "Not Found",
        "<h1>404 - Page Not Found</h1>\n<p><a href=\"/\">Back to index</a></p>",
    )
}

/// 通用错误页（5xx 响应体）
pub fn error_page(message: &str) -> String {
    let body = format!(
        "<h1>Something went wrong</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to index</a></p>",
        escape(message)
    );
    layout("Error", &body)
}
