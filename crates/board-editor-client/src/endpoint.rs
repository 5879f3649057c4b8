use std::fmt;
use url::Url;

/// The two REST roots the board administration calls are spread over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRoot {
    /// `rest/agile/1.0`, the public board API.
    Agile,
    /// `rest/greenhopper/1.0`, the internal API behind board configuration.
    Greenhopper,
}

impl ApiRoot {
    pub fn segments(self) -> [&'static str; 3] {
        match self {
            ApiRoot::Agile => ["rest", "agile", "1.0"],
            ApiRoot::Greenhopper => ["rest", "greenhopper", "1.0"],
        }
    }
}

/// A resource path below one of the API roots, with optional query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    root: ApiRoot,
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl Endpoint {
    pub fn new(root: ApiRoot) -> Self {
        Self {
            root,
            segments: Vec::new(),
            query: Vec::new(),
        }
    }

    pub fn agile() -> Self {
        Self::new(ApiRoot::Agile)
    }

    pub fn greenhopper() -> Self {
        Self::new(ApiRoot::Greenhopper)
    }

    pub fn segment(mut self, segment: impl ToString) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn root(&self) -> ApiRoot {
        self.root
    }

    /// Path below the root, e.g. `swimlanes/7/12`.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Full URL below `base`. Each segment is percent-encoded on its own.
    pub fn resolve(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(self.root.segments())
                .extend(&self.segments);
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.root.segments().join("/"), self.path())?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}
