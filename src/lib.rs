//! HTML templates from interpolated string literals.

//! `html!` builds a `Template` from static fragments and dynamic
//! values; `serialize` turns it into HTML, escaping every value that
//! isn't itself a template. See `render` for putting the result into
//! a target object.

pub mod warn;
pub mod util;
pub mod myfrom;
pub mod error;
pub mod escape;
pub mod value;
pub mod template;
pub mod serialize;
pub mod render;
pub mod json;

// For use by `html!`
#[doc(hidden)]
pub use kstring;

pub use error::{ShapeError, TemplateError};
pub use template::{Template, TEMPLATE_MARKER, is_template};
pub use value::{Value, Scalar};
pub use serialize::{serialize, PrintHtml};
pub use render::{RenderTarget, MockBody, Renderable, render, render_to_string,
                 make_renderable, create_mock_body, create_renderer};
pub use json::is_template_json;

/// Everything under one name.
pub mod dom_template {
    pub use crate::html;
    pub use crate::template::Template;
    pub use crate::value::Value;
    pub use crate::serialize::serialize;
    pub use crate::render::{RenderTarget, render, render_to_string, make_renderable,
                            create_mock_body, create_renderer};
}


#[cfg(test)]
mod tests {
    use crate::dom_template;

    #[test]
    fn t_dom_template() {
        let template = dom_template::html!("<div>Test</div>");
        assert_eq!(dom_template::render_to_string(&template), "<div>Test</div>");

        let mut body = dom_template::create_mock_body();
        {
            let mut render = dom_template::create_renderer(&mut body);
            render(&dom_template::html!("<div>", "Curried", "</div>"));
        }
        assert_eq!(body.inner_html, "<div>Curried</div>");
    }
}
