/// Reference link shown next to a verdict so the reader can verify further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLink {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl ReferenceLink {
    fn fixed(title: &str, url: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            description: description.to_string(),
        }
    }
}

pub const MIN_LINKS: usize = 3;
pub const MAX_LINKS: usize = 6;

/// Known source-name substrings (lowercased) and the electoral body they
/// resolve to.
const KNOWN_SOURCES: [(&[&str], fn() -> ReferenceLink); 4] = [
    (&["cne", "consejo nacional electoral", "electoral council"], cne_link),
    (&["tce", "contencioso electoral", "contentious"], tce_link),
    (&["participacion ciudadana", "participación ciudadana", "citizen participation"], cpc_link),
    (&["oea", "oas", "observation mission"], oas_link),
];

fn cne_link() -> ReferenceLink {
    ReferenceLink::fixed(
        "National Electoral Council Ecuador",
        "https://www.cne.gob.ec/",
        "Official website of the electoral body",
    )
}

fn cpc_link() -> ReferenceLink {
    ReferenceLink::fixed(
        "Citizen Participation Ecuador",
        "https://www.participacionciudadana.org/",
        "Electoral observation organization",
    )
}

fn tce_link() -> ReferenceLink {
    ReferenceLink::fixed(
        "Electoral Contentious Court",
        "https://www.tce.gob.ec/",
        "Electoral jurisdictional body",
    )
}

fn oas_link() -> ReferenceLink {
    ReferenceLink::fixed(
        "OAS Electoral Observation",
        "https://www.oas.org/en/spa/deco/",
        "International electoral observation missions",
    )
}

fn default_links() -> [ReferenceLink; 3] {
    [cne_link(), cpc_link(), tce_link()]
}

/// Maps the verdict's consulted sources to reference links. Known source
/// names resolve through the fixed table; unknown sources get a search-engine
/// URL built from the source text. The list is padded with defaults up to
/// `MIN_LINKS` and truncated at `MAX_LINKS`.
pub fn derive_links(sources: &[String]) -> Vec<ReferenceLink> {
    let mut links: Vec<ReferenceLink> = Vec::new();
    for source in sources {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            continue;
        }
        let link = lookup_known(trimmed).unwrap_or_else(|| search_link(trimmed));
        if links.iter().all(|existing| existing.url != link.url) {
            links.push(link);
        }
    }
    for fallback in default_links() {
        if links.len() >= MIN_LINKS {
            break;
        }
        if links.iter().all(|existing| existing.url != fallback.url) {
            links.push(fallback);
        }
    }
    links.truncate(MAX_LINKS);
    links
}

fn lookup_known(source: &str) -> Option<ReferenceLink> {
    let lowered = source.to_lowercase();
    for (needles, build) in KNOWN_SOURCES {
        if needles.iter().any(|needle| lowered.contains(needle)) {
            return Some(build());
        }
    }
    None
}

fn search_link(source: &str) -> ReferenceLink {
    ReferenceLink {
        title: source.to_string(),
        url: format!(
            "https://www.google.com/search?q={}",
            urlencoding::encode(source)
        ),
        description: "Search results for this source".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn known_sources_map_to_fixed_table() {
        let links = derive_links(&sources(&["Boletín del CNE", "TCE ruling 2025-17"]));
        assert_eq!(links[0].url, "https://www.cne.gob.ec/");
        assert_eq!(links[1].url, "https://www.tce.gob.ec/");
    }

    #[test]
    fn unknown_sources_get_search_urls() {
        let links = derive_links(&sources(&["Diario El Comercio"]));
        assert_eq!(links[0].title, "Diario El Comercio");
        assert!(links[0].url.starts_with("https://www.google.com/search?q="));
        assert!(links[0].url.contains("Diario%20El%20Comercio"));
    }

    #[test]
    fn short_lists_are_padded_to_minimum() {
        let links = derive_links(&sources(&["Diario El Comercio"]));
        assert_eq!(links.len(), MIN_LINKS);
    }

    #[test]
    fn empty_sources_yield_the_default_links() {
        let links = derive_links(&[]);
        assert_eq!(links.len(), MIN_LINKS);
        assert_eq!(links[0].url, "https://www.cne.gob.ec/");
    }

    #[test]
    fn long_lists_are_truncated_at_maximum() {
        let many = sources(&[
            "Source one",
            "Source two",
            "Source three",
            "Source four",
            "Source five",
            "Source six",
            "Source seven",
        ]);
        let links = derive_links(&many);
        assert_eq!(links.len(), MAX_LINKS);
    }

    #[test]
    fn duplicate_sources_collapse() {
        let links = derive_links(&sources(&["CNE", "Consejo Nacional Electoral"]));
        let cne_count = links
            .iter()
            .filter(|link| link.url == "https://www.cne.gob.ec/")
            .count();
        assert_eq!(cne_count, 1);
    }
}
