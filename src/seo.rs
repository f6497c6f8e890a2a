//! Per-page SEO metadata for the marketing site.
//!
//! The copy is fixed at compile time. Urls (`og:url`, canonical links,
//! sitemap entries) are derived from the configured canonical origin.

use serde::Serialize;
use std::fmt::Write;
use url::Url;

const TWITTER_CARD: &str = "summary_large_image";
const DEFAULT_OG_IMAGE: &str =
    "https://images.unsplash.com/photo-1497366811353-6870744d04b2?auto=format&fit=crop&q=80&w=1200";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Products,
    Technology,
    Process,
    Partners,
    Privacy,
    Terms,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::About,
        Page::Products,
        Page::Technology,
        Page::Process,
        Page::Partners,
        Page::Privacy,
        Page::Terms,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Products => "products",
            Page::Technology => "technology",
            Page::Process => "process",
            Page::Partners => "partners",
            Page::Privacy => "privacy",
            Page::Terms => "terms",
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Products => "/products",
            Page::Technology => "/technology",
            Page::Process => "/process",
            Page::Partners => "/partners",
            Page::Privacy => "/privacy",
            Page::Terms => "/terms",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.key() == key)
    }

    /// Matches `/about`, `about` and `/about/`, but not `/about/team`.
    pub fn from_route(path: &str) -> Option<Page> {
        let trimmed = path.trim_matches('/');
        Page::ALL
            .into_iter()
            .find(|page| page.route().trim_start_matches('/') == trimmed)
    }

    fn copy(self) -> &'static PageCopy {
        &PAGE_COPY[self as usize]
    }
}

struct PageCopy {
    title: &'static str,
    description: &'static str,
    keywords: &'static str,
    og_description: &'static str,
    og_image: &'static str,
    twitter_description: &'static str,
}

// Indexed by `Page` discriminant.
static PAGE_COPY: [PageCopy; 8] = [
    PageCopy {
        title: "AxiWatt – Luxury Solar Architecture | Sustainable Solar Solutions",
        description: "Discover AxiWatt’s luxury solar architecture and energy solutions that combine aesthetics with sustainable performance. Power your space with elegance and efficiency.",
        keywords: "luxury solar architecture, solar energy systems, renewable energy, solar pergolas, solar glass facades, sustainable architecture, high-end solar solutions, energy autonomy, private estates",
        og_description: "Discover AxiWatt’s luxury solar architecture and energy solutions that combine aesthetics with sustainable performance. Power your space with elegance and efficiency.",
        og_image: DEFAULT_OG_IMAGE,
        twitter_description: "Discover AxiWatt’s luxury solar architecture and energy solutions that combine aesthetics with sustainable performance.",
    },
    PageCopy {
        title: "About AxiWatt – Innovative Luxury Solar Architecture",
        description: "Learn about AxiWatt’s mission, vision, and commitment to redefining solar architecture with premium design and cutting-edge energy technologies.",
        keywords: "solar architecture firm, renewable energy company, luxury estate development, sustainable architecture, energy governance, private collective",
        og_description: "Learn about AxiWatt’s mission, vision, and commitment to redefining solar architecture with premium design and cutting-edge energy technologies.",
        og_image: "https://images.unsplash.com/photo-1497366754035-f200968a6e72?auto=format&fit=crop&q=80&w=1200",
        twitter_description: "Learn about AxiWatt’s mission, vision, and commitment to redefining solar architecture with premium design.",
    },
    PageCopy {
        title: "Integrated Solar Panel Systems | AxiWatt",
        description: "High-performance solar panel integration for residential and commercial projects. AxiWatt delivers smart, reliable renewable energy systems.",
        keywords: "solar pergolas, solar glass facades, solar railings, walkable solar tiles, building-integrated photovoltaics, BIPV, bioclimatic pergolas",
        og_description: "High-performance solar panel integration for residential and commercial projects. AxiWatt delivers smart, reliable renewable energy systems.",
        og_image: "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?auto=format&fit=crop&q=80&w=1200",
        twitter_description: "High-performance solar panel integration for residential and commercial projects.",
    },
    PageCopy {
        title: "Solar Architecture Technology & Innovation | AxiWatt",
        description: "AxiWatt leverages the latest solar technology and innovation to create energy-efficient, beautiful architectural solutions for modern buildings.",
        keywords: "solar technology, energy storage, EV charging, solar modules, battery systems, renewable energy management, Axiwatt OS, intelligent energy systems",
        og_description: "AxiWatt leverages the latest solar technology and innovation to create energy-efficient, beautiful architectural solutions for modern buildings.",
        og_image: DEFAULT_OG_IMAGE,
        twitter_description: "Latest solar technology and innovation for energy-efficient, beautiful architectural solutions.",
    },
    PageCopy {
        title: "Solar Architecture & Design Services | AxiWatt",
        description: "Explore AxiWatt’s professional services in solar architecture, design engineering, and bespoke renewable energy installations for homes and commercial spaces.",
        keywords: "architects, designers, solar integration, BIM tools, architectural collaboration, sustainable design, integrated solar architecture",
        og_description: "Explore AxiWatt’s professional services in solar architecture, design engineering, and bespoke renewable energy installations.",
        og_image: DEFAULT_OG_IMAGE,
        twitter_description: "Professional services in solar architecture, design engineering, and bespoke renewable energy installations.",
    },
    PageCopy {
        title: "AxiWatt Partners | Renewable Energy & Architecture Collaboration",
        description: "Meet AxiWatt’s network of partners and affiliates contributing to excellence in solar architecture, technology, and sustainable building",
        keywords: "concierge services, energy management, lifecycle management, private services, regulatory stewardship, energy consulting, maintenance",
        og_description: "Meet AxiWatt’s network of partners and affiliates contributing to excellence in solar architecture, technology, and sustainable building",
        og_image: DEFAULT_OG_IMAGE,
        twitter_description: "AxiWatt’s network of partners and affiliates contributing to excellence in solar architecture and sustainable building.",
    },
    PageCopy {
        title: "Privacy Policy | AxiWatt",
        description: "Learn how AxiWatt protects your data and respects your privacy. Our policy explains collecting, storing, and using personal information.",
        keywords: "privacy policy, data protection, confidentiality, security, personal data, GDPR, data rights",
        og_description: "Learn how AxiWatt protects your data and respects your privacy.",
        og_image: DEFAULT_OG_IMAGE,
        twitter_description: "Learn how AxiWatt protects your data and respects your privacy.",
    },
    PageCopy {
        title: "Terms & Conditions | AxiWatt",
        description: "Read the terms and conditions governing the use of AxiWatt’s website and services — transparency and user trust guaranteed.",
        keywords: "terms of service, terms and conditions, legal terms, user agreement, service terms",
        og_description: "Read the terms and conditions governing the use of AxiWatt’s website and services.",
        og_image: DEFAULT_OG_IMAGE,
        twitter_description: "Read the terms and conditions governing the use of AxiWatt’s website and services.",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub og_title: &'static str,
    pub og_description: &'static str,
    pub og_image: &'static str,
    pub og_url: String,
    pub twitter_card: &'static str,
    pub twitter_title: &'static str,
    pub twitter_description: &'static str,
    pub canonical_url: String,
}

impl PageMeta {
    /// `<meta>`/`<link>` tags for the document head.
    pub fn head_tags(&self) -> String {
        let mut tags = String::new();
        let named = [
            ("description", self.description),
            ("keywords", self.keywords),
            ("twitter:card", self.twitter_card),
            ("twitter:title", self.twitter_title),
            ("twitter:description", self.twitter_description),
            ("twitter:image", self.og_image),
        ];
        let properties = [
            ("og:title", self.og_title),
            ("og:description", self.og_description),
            ("og:image", self.og_image),
            ("og:url", self.og_url.as_str()),
            ("og:type", "website"),
        ];
        for (name, content) in named {
            let _ = writeln!(
                tags,
                r#"<meta name="{name}" content="{}" />"#,
                escape_html(content)
            );
        }
        for (property, content) in properties {
            let _ = writeln!(
                tags,
                r#"<meta property="{property}" content="{}" />"#,
                escape_html(content)
            );
        }
        let _ = writeln!(
            tags,
            r#"<link rel="canonical" href="{}" />"#,
            escape_html(&self.canonical_url)
        );
        tags
    }
}

#[derive(Debug, Clone)]
pub struct SeoConfig {
    base_url: String,
}

impl SeoConfig {
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        let parsed = Url::parse(base_url)?;
        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn canonical_url(&self, page: Page) -> String {
        match page {
            Page::Home => self.base_url.clone(),
            other => format!("{}{}", self.base_url, other.route()),
        }
    }

    pub fn page(&self, page: Page) -> PageMeta {
        let copy = page.copy();
        let url = self.canonical_url(page);
        PageMeta {
            title: copy.title,
            description: copy.description,
            keywords: copy.keywords,
            og_title: copy.title,
            og_description: copy.og_description,
            og_image: copy.og_image,
            og_url: url.clone(),
            twitter_card: TWITTER_CARD,
            twitter_title: copy.title,
            twitter_description: copy.twitter_description,
            canonical_url: url,
        }
    }

    pub fn pages(&self) -> impl Iterator<Item = (Page, PageMeta)> + '_ {
        Page::ALL.into_iter().map(|page| (page, self.page(page)))
    }

    pub fn sitemap_xml(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );
        for page in Page::ALL {
            let priority = if page == Page::Home { "1.0" } else { "0.8" };
            let _ = write!(
                xml,
                "  <url>\n    <loc>{}</loc>\n    <changefreq>monthly</changefreq>\n    <priority>{priority}</priority>\n  </url>\n",
                escape_html(&self.canonical_url(page))
            );
        }
        xml.push_str("</urlset>\n");
        xml
    }

    pub fn robots_txt(&self) -> String {
        format!(
            "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
            self.base_url
        )
    }
}

/// Injects page metadata into the SPA shell: the `<title>` text is replaced
/// and the head tags land right before `</head>`. Shells without a `</head>`
/// are returned untouched.
pub fn render_page_shell(index_html: &str, meta: &PageMeta) -> String {
    let Some(head_end) = index_html.find("</head>") else {
        return index_html.to_string();
    };

    let mut head = index_html[..head_end].to_string();
    let title = format!("<title>{}</title>", escape_html(meta.title));
    match (head.find("<title>"), head.find("</title>")) {
        (Some(start), Some(end)) if start < end => {
            head.replace_range(start..end + "</title>".len(), &title);
        }
        _ => {
            head.push_str(&title);
            head.push('\n');
        }
    }

    let mut page = head;
    page.push_str(&meta.head_tags());
    page.push_str(&index_html[head_end..]);
    page
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
