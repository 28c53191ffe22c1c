//! Portfolio content model.
//!
//! The dataset is immutable and known at compile time; sections receive it
//! by reference and render it verbatim. Nothing here validates; malformed
//! entries degrade visually, they never raise.

pub mod data;

// =============================================================================
// Types
// =============================================================================

/// Owner identity and contact channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

impl Profile {
    /// Mail link: `mailto:` + the address verbatim, no encoding.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// The hero splits the name on whitespace: first token on one line,
    /// the rest on the next. A single-token name leaves the second line
    /// empty.
    pub fn name_lines(&self) -> (&'static str, &'static str) {
        let mut parts = self.name.splitn(2, char::is_whitespace);
        let first = parts.next().unwrap_or(self.name);
        let rest = parts.next().unwrap_or("").trim_start();
        (first, rest)
    }
}

/// Where a project's banner image comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// Bundled asset path.
    Bundled(&'static str),
    /// Remote URL.
    Remote(&'static str),
}

/// A featured project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Ordered description bullets.
    pub description: &'static [&'static str],
    /// Ordered technology tags, one chip each.
    pub tech_stack: &'static [&'static str],
    pub image: Option<ImageSource>,
    pub external_link: Option<&'static str>,
}

impl Project {
    /// The banner image reference shown on the card.
    ///
    /// Projects without an image fall back to a placeholder URL seeded by
    /// the project's identity, so the same project always gets the same
    /// placeholder.
    pub fn image_ref(&self) -> String {
        match self.image {
            Some(ImageSource::Bundled(path)) => path.to_string(),
            Some(ImageSource::Remote(url)) => url.to_string(),
            None => format!("https://picsum.photos/seed/{}/800/500", self.seed()),
        }
    }

    /// Deterministic seed: first title word, lowercased.
    fn seed(&self) -> String {
        self.title
            .split_whitespace()
            .next()
            .unwrap_or("project")
            .to_lowercase()
    }
}

/// A position on the work timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    /// Ordered achievement bullets.
    pub achievements: &'static [&'static str],
}

/// A degree program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub coursework: &'static str,
}

/// A labelled group of skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

// =============================================================================
// Content
// =============================================================================

/// The full dataset, assembled once at startup.
#[derive(Debug, Clone, Copy)]
pub struct Content {
    pub profile: Profile,
    pub projects: &'static [Project],
    pub experiences: &'static [Experience],
    pub education: &'static [Education],
    pub skills: &'static [SkillCategory],
}

impl Content {
    pub fn load() -> Self {
        Self {
            profile: data::PROFILE,
            projects: data::PROJECTS,
            experiences: data::EXPERIENCES,
            education: data::EDUCATION,
            skills: data::SKILLS,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_verbatim() {
        let content = Content::load();
        assert_eq!(content.profile.mailto(), "mailto:adicadi158@gmail.com");
    }

    #[test]
    fn test_name_lines_split() {
        let content = Content::load();
        let (first, second) = content.profile.name_lines();
        assert_eq!(first, "Aditya");
        assert_eq!(second, "Chaudhary");
    }

    #[test]
    fn test_name_lines_single_token() {
        let profile = Profile {
            name: "Prince",
            ..data::PROFILE
        };
        assert_eq!(profile.name_lines(), ("Prince", ""));
    }

    #[test]
    fn test_image_ref_sources() {
        let content = Content::load();
        assert_eq!(content.projects[0].image_ref(), "assets/Medipal.png");
        assert_eq!(
            content.projects[1].image_ref(),
            "https://picsum.photos/seed/driver/800/500"
        );
    }

    #[test]
    fn test_image_ref_placeholder_is_deterministic() {
        let project = Project {
            image: None,
            ..data::PROJECTS[0]
        };
        assert_eq!(
            project.image_ref(),
            "https://picsum.photos/seed/medipal/800/500"
        );
        assert_eq!(project.image_ref(), project.image_ref());
    }

    #[test]
    fn test_dataset_shape() {
        let content = Content::load();
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.experiences.len(), 2);
        assert_eq!(content.education.len(), 2);
        assert_eq!(content.skills.len(), 4);
    }

    #[test]
    fn test_experiences_ordered_most_recent_first() {
        let content = Content::load();
        assert_eq!(content.experiences[0].company, "Pixlia Tech");
        assert_eq!(content.experiences[1].company, "TradeMunch");
    }
}
