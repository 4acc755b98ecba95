//! Profile chain resolution.
//!
//! The chain is nearest-to-component first: the starting profile, its
//! declared parent (one level only), then the base profile whenever the run
//! did not start from it. The base profile may therefore appear twice; each
//! layer is validated independently, so a duplicate only repeats assertions.

use tracing::{debug, info};
use url::Url;

use super::Profile;
use crate::error::Result;
use crate::source::{self, Loader, XML_ACCEPT};

/// Loads profiles and assembles the chain of layers for a run.
pub struct ProfileResolver<'a> {
    loader: &'a dyn Loader,
    base_profile: Url,
}

impl<'a> ProfileResolver<'a> {
    /// Creates a resolver that appends `base_profile` to every chain that
    /// does not start there.
    #[must_use]
    pub fn new(loader: &'a dyn Loader, base_profile: Url) -> Self {
        Self {
            loader,
            base_profile,
        }
    }

    /// Loads and parses a single profile.
    ///
    /// # Errors
    ///
    /// Returns the loader's error if the profile cannot be fetched, or a
    /// reader error if it is not a valid profile.
    pub fn load(&self, location: &Url) -> Result<Profile> {
        let fetched = self.loader.load(location, XML_ACCEPT)?;
        let profile = Profile::from_xml(&fetched.content, &fetched.location)?;
        debug!(id = %profile.id, %location, "loaded profile");
        Ok(profile)
    }

    /// Builds the ordered list of layers starting at `start`.
    ///
    /// # Errors
    ///
    /// Fails if any profile in the chain cannot be loaded, including a
    /// declared parent and the base profile.
    pub fn resolve_chain(&self, start: &Url) -> Result<Vec<Profile>> {
        let first = self.load(start)?;
        let mut parent_location = None;
        let mut chain = Vec::with_capacity(3);

        if let Some(reference) = &first.extends {
            let location = source::resolve(reference, &first.location)?;
            let parent = self.load(&location)?;
            parent_location = Some(location);
            chain.push(first);
            chain.push(parent);
        } else {
            chain.push(first);
        }

        if *start != self.base_profile {
            let base = match (&parent_location, chain.last()) {
                (Some(location), Some(parent)) if *location == self.base_profile => parent.clone(),
                _ => self.load(&self.base_profile)?,
            };
            chain.push(base);
        }

        for (depth, layer) in chain.iter().enumerate() {
            info!(depth, id = %layer.id, location = %layer.location, "profile layer");
        }
        Ok(chain)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::profile::PROFILE_NAMESPACE;
    use crate::tests::MemoryLoader;

    fn profile(id: &str, extends: Option<&str>) -> String {
        let extends = extends
            .map(|e| format!("<extends><id>{e}</id></extends>"))
            .unwrap_or_default();
        format!(r#"<profile xmlns="{PROFILE_NAMESPACE}"><id>{id}</id>{extends}<component/></profile>"#)
    }

    fn ids(chain: &[Profile]) -> Vec<&str> {
        chain.iter().map(|p| p.id.as_str()).collect()
    }

    fn base() -> Url {
        Url::parse("http://example.org/base.xml").unwrap()
    }

    #[test]
    fn appends_parent_then_base() {
        let loader = MemoryLoader::new()
            .with("http://example.org/p/child.xml", profile("child", Some("parent.xml")))
            .with("http://example.org/p/parent.xml", profile("parent", None))
            .with("http://example.org/base.xml", profile("base", None));
        let resolver = ProfileResolver::new(&loader, base());
        let chain = resolver
            .resolve_chain(&Url::parse("http://example.org/p/child.xml").unwrap())
            .unwrap();
        assert_eq!(ids(&chain), ["child", "parent", "base"]);
    }

    #[test]
    fn follows_only_one_level_of_extends() {
        let loader = MemoryLoader::new()
            .with("http://example.org/a.xml", profile("a", Some("b.xml")))
            .with("http://example.org/b.xml", profile("b", Some("c.xml")))
            .with("http://example.org/base.xml", profile("base", None));
        let resolver = ProfileResolver::new(&loader, base());
        let chain = resolver
            .resolve_chain(&Url::parse("http://example.org/a.xml").unwrap())
            .unwrap();
        assert_eq!(ids(&chain), ["a", "b", "base"]);
        assert_eq!(loader.loads("http://example.org/c.xml"), 0);
    }

    #[test]
    fn base_extended_directly_appears_twice_without_refetch() {
        let loader = MemoryLoader::new()
            .with("http://example.org/a.xml", profile("a", Some("base.xml")))
            .with("http://example.org/base.xml", profile("base", None));
        let resolver = ProfileResolver::new(&loader, base());
        let chain = resolver
            .resolve_chain(&Url::parse("http://example.org/a.xml").unwrap())
            .unwrap();
        assert_eq!(ids(&chain), ["a", "base", "base"]);
        assert_eq!(loader.loads("http://example.org/base.xml"), 1);
    }

    #[test]
    fn starting_at_base_adds_nothing() {
        let loader =
            MemoryLoader::new().with("http://example.org/base.xml", profile("base", None));
        let resolver = ProfileResolver::new(&loader, base());
        let chain = resolver.resolve_chain(&base()).unwrap();
        assert_eq!(ids(&chain), ["base"]);
    }

    #[test]
    fn missing_parent_is_fatal() {
        let loader = MemoryLoader::new()
            .with("http://example.org/a.xml", profile("a", Some("gone.xml")))
            .with("http://example.org/base.xml", profile("base", None));
        let resolver = ProfileResolver::new(&loader, base());
        let err = resolver
            .resolve_chain(&Url::parse("http://example.org/a.xml").unwrap())
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
