use super::{context::RenderContext, directive::SortDirective};
use crate::sorting::{DEFAULT_HEADER_CLASS, SortLink, build_link};

/// Output variant of a sortable tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `<a href=".." class=".." title="..">..</a>`
    Link,
    /// `<th class=".."><a href=".." title="..">..</a></th>`
    Header,
    /// The bare URL.
    Url,
    /// The bare CSS class.
    Class,
}

impl TagKind {
    pub const ALL: [TagKind; 4] =
        [TagKind::Link, TagKind::Header, TagKind::Url, TagKind::Class];

    /// Name the tag is registered under by [`super::TagLibrary::sortable`].
    pub const fn tag_name(self) -> &'static str {
        match self {
            TagKind::Link => "sortable_link",
            TagKind::Header => "sortable_header",
            TagKind::Url => "sortable_url",
            TagKind::Class => "sortable_class",
        }
    }
}

/// A compiled sortable tag, ready to render against any request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableNode {
    kind: TagKind,
    directive: SortDirective,
}

impl SortableNode {
    pub fn new(kind: TagKind, directive: SortDirective) -> Self {
        Self { kind, directive }
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn directive(&self) -> &SortDirective {
        &self.directive
    }

    /// Link computation shared by every output variant.
    pub fn build_link(&self, ctx: &RenderContext<'_>) -> SortLink {
        let field = self.directive.field.resolve(ctx);
        build_link(
            ctx.request(),
            &field,
            self.directive.default_direction,
            ctx.styles(),
        )
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        let link = self.build_link(ctx);
        match self.kind {
            TagKind::Link => {
                let title = self.directive.title.resolve(ctx);
                format!(
                    r#"<a href="{}" class="{}" title="{title}">{title}</a>"#,
                    link.url, link.css_class
                )
            }
            TagKind::Header => {
                let title = self.directive.title.resolve(ctx);
                let header_class =
                    header_class(&self.directive.header_class.resolve(ctx));
                format!(
                    r#"<th class="{} {header_class}"><a href="{}" title="{title}">{title}</a></th>"#,
                    link.css_class, link.url
                )
            }
            TagKind::Url => link.url,
            TagKind::Class => link.css_class,
        }
    }
}

/// `sortable-col` plus the extra class, without repeating the default.
fn header_class(extra: &str) -> String {
    if extra.is_empty() || extra == DEFAULT_HEADER_CLASS {
        DEFAULT_HEADER_CLASS.to_string()
    } else {
        format!("{DEFAULT_HEADER_CLASS} {extra}")
    }
}
