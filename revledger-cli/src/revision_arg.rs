//! `--revision` argument parsing
//!
//! Syntax: `NAME[:added=P1,P2][:removed=P3][:modified=P4]`

use revledger_core::{FileSet, Revision};
use std::str::FromStr;

/// Errors in a `--revision` argument
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RevisionArgError {
    #[error("revision name is empty")]
    EmptyName,

    #[error("section '{0}' is missing '='")]
    MissingEquals(String),

    #[error("unknown section '{0}' (expected added, removed or modified)")]
    UnknownSection(String),

    #[error("section '{0}' given more than once")]
    DuplicateSection(String),
}

/// A revision described on the command line
#[derive(Debug, Clone)]
pub struct RevisionArg {
    pub name: String,
    pub added: Option<FileSet>,
    pub removed: Option<FileSet>,
    pub modified: Option<FileSet>,
}

impl RevisionArg {
    pub fn into_revision(self) -> Revision {
        let mut revision = Revision::new(self.name);
        if let Some(files) = self.added {
            revision = revision.with_files_added(files);
        }
        if let Some(files) = self.removed {
            revision = revision.with_files_removed(files);
        }
        if let Some(files) = self.modified {
            revision = revision.with_files_modified(files);
        }
        revision
    }
}

impl FromStr for RevisionArg {
    type Err = RevisionArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(RevisionArgError::EmptyName);
        }

        let mut arg = RevisionArg {
            name: name.to_string(),
            added: None,
            removed: None,
            modified: None,
        };

        for section in parts {
            let (key, value) = section
                .split_once('=')
                .ok_or_else(|| RevisionArgError::MissingEquals(section.to_string()))?;

            let slot = match key {
                "added" => &mut arg.added,
                "removed" => &mut arg.removed,
                "modified" => &mut arg.modified,
                other => return Err(RevisionArgError::UnknownSection(other.to_string())),
            };
            if slot.is_some() {
                return Err(RevisionArgError::DuplicateSection(key.to_string()));
            }

            *slot = Some(value.split(',').filter(|p| !p.is_empty()).collect());
        }

        Ok(arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_only() {
        let arg: RevisionArg = "rev1".parse().unwrap();
        assert_eq!(arg.name, "rev1");
        assert!(arg.added.is_none());
        assert!(arg.removed.is_none());
        assert!(arg.modified.is_none());
    }

    #[test]
    fn test_parse_all_sections() {
        let arg: RevisionArg = "rev2:removed=b.osg:added=a.osg,c.osg:modified=m.osg"
            .parse()
            .unwrap();
        assert_eq!(arg.name, "rev2");

        let added = arg.added.as_ref().unwrap();
        assert_eq!(added.len(), 2);
        assert!(added.contains("a.osg"));
        assert!(added.contains("c.osg"));
        assert!(arg.removed.as_ref().unwrap().contains("b.osg"));
        assert!(arg.modified.as_ref().unwrap().contains("m.osg"));

        let revision = arg.into_revision();
        assert!(revision.is_blacklisted("a.osg"));
        assert!(revision.is_blacklisted("b.osg"));
        assert!(!revision.is_blacklisted("m.osg"));
    }

    #[test]
    fn test_empty_section_gives_empty_set() {
        let arg: RevisionArg = "rev1:added=".parse().unwrap();
        assert!(arg.added.unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<RevisionArg>().unwrap_err(), RevisionArgError::EmptyName);
        assert_eq!(
            ":added=a".parse::<RevisionArg>().unwrap_err(),
            RevisionArgError::EmptyName
        );
        assert_eq!(
            "rev1:added".parse::<RevisionArg>().unwrap_err(),
            RevisionArgError::MissingEquals("added".to_string())
        );
        assert_eq!(
            "rev1:renamed=a".parse::<RevisionArg>().unwrap_err(),
            RevisionArgError::UnknownSection("renamed".to_string())
        );
        assert_eq!(
            "rev1:added=a:added=b".parse::<RevisionArg>().unwrap_err(),
            RevisionArgError::DuplicateSection("added".to_string())
        );
    }
}
