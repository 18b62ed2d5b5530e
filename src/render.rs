//! Putting serialized templates somewhere: render targets.

use std::ops::{Deref, DerefMut};

use crate::serialize::serialize;
use crate::template::Template;
use crate::nowarn as warn;

/// Something that can receive the HTML of a rendered template, like
/// a DOM node's `innerHTML`.
pub trait RenderTarget {
    fn set_inner_html(&mut self, html: String);
    fn inner_html(&self) -> &str;
}

/// A `document.body` stand-in for server side rendering.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MockBody {
    pub inner_html: String,
}

impl RenderTarget for MockBody {
    fn set_inner_html(&mut self, html: String) {
        self.inner_html = html;
    }

    fn inner_html(&self) -> &str {
        &self.inner_html
    }
}

impl RenderTarget for String {
    fn set_inner_html(&mut self, html: String) {
        *self = html;
    }

    fn inner_html(&self) -> &str {
        self
    }
}

pub fn render_to_string(template: &Template) -> String {
    serialize(template)
}

/// Replace the contents of `target` with the HTML for `template`.
pub fn render<T: RenderTarget + ?Sized>(target: &mut T, template: &Template) {
    let html = render_to_string(template);
    warn!("render: {} bytes", html.len());
    target.set_inner_html(html);
}


/// A target with a `render` method added, see `make_renderable`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Renderable<T> {
    target: T,
}

impl<T: RenderTarget> Renderable<T> {
    pub fn render(&mut self, template: &Template) {
        render(&mut self.target, template)
    }

    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<T> Deref for Renderable<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.target
    }
}

impl<T> DerefMut for Renderable<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.target
    }
}

impl<T: RenderTarget> RenderTarget for Renderable<T> {
    fn set_inner_html(&mut self, html: String) {
        self.target.set_inner_html(html)
    }

    fn inner_html(&self) -> &str {
        self.target.inner_html()
    }
}

pub fn make_renderable<T: RenderTarget>(target: T) -> Renderable<T> {
    Renderable { target }
}

/// An empty, renderable `MockBody`.
pub fn create_mock_body() -> Renderable<MockBody> {
    make_renderable(MockBody::default())
}

/// Bind `target`, returning a function that renders into it.
pub fn create_renderer<'t, T: RenderTarget + ?Sized>(
    target: &'t mut T
) -> impl FnMut(&Template) + 't
{
    move |template: &Template| render(&mut *target, template)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::html;

    fn page(title: &str, body: &str) -> Template {
        html!("
    <h1>", title, "</h1>
    <p>", body, "</p>
  ")
    }

    #[test]
    fn t_mock_body() {
        let body = create_mock_body();
        assert_eq!(body.inner_html, "");
        assert_eq!(body.inner_html(), "");
    }

    #[test]
    fn t_render() {
        let mut body = create_mock_body();
        body.render(&html!("<div>Test</div>"));
        assert_eq!(body.inner_html, "<div>Test</div>");

        body.render(&html!("<div>First</div>"));
        assert_eq!(body.inner_html, "<div>First</div>");
        body.render(&html!("<div>Second</div>"));
        assert_eq!(body.inner_html, "<div>Second</div>");
        assert_eq!(body.into_inner(), MockBody { inner_html: "<div>Second</div>".into() });
    }

    #[test]
    fn t_page_function() {
        let mut body = create_mock_body();
        body.render(&page("Hello Templates", "abc"));
        assert!(body.inner_html.contains("<h1>Hello Templates</h1>"));
        assert!(body.inner_html.contains("<p>abc</p>"));

        body.render(&page("Hello Updates", "def"));
        assert!(body.inner_html.contains("<h1>Hello Updates</h1>"));
        assert!(body.inner_html.contains("<p>def</p>"));
        assert!(!body.inner_html.contains("abc"));
    }

    #[test]
    fn t_render_free_function() {
        let mut s = String::from("old");
        render(&mut s, &html!("<b>", "x", "</b>"));
        assert_eq!(s, "<b>x</b>");

        let mut body = MockBody::default();
        render(&mut body, &html!("<i>i</i>"));
        assert_eq!(body.inner_html, "<i>i</i>");
    }

    #[test]
    fn t_create_renderer() {
        let mut body = create_mock_body();
        {
            let mut render = create_renderer(&mut body);
            render(&html!("<div>Curried</div>"));
        }
        assert_eq!(body.inner_html, "<div>Curried</div>");
    }

    #[test]
    fn t_renderers_independent() {
        let mut body1 = create_mock_body();
        let mut body2 = create_mock_body();
        let template = html!("<div>Test</div>");
        {
            let mut render1 = create_renderer(&mut body1);
            let mut render2 = create_renderer(&mut body2);
            render1(&template);
            render2(&template);
            render1(&html!("<div>Other</div>"));
        }
        assert_eq!(body1.inner_html, "<div>Other</div>");
        assert_eq!(body2.inner_html, "<div>Test</div>");
    }

    #[test]
    fn t_renderer_dyn() {
        let mut targets: Vec<Box<dyn RenderTarget>> =
            vec![Box::new(MockBody::default()), Box::new(String::new())];
        for target in &mut targets {
            render(&mut **target, &html!("<p>", 1, "</p>"));
        }
        assert!(targets.iter().all(|t| t.inner_html() == "<p>1</p>"));
    }
}
