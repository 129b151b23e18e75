//! The built-in forensic science resource list.
//!
//! Records are listed in canonical display order. File names match the
//! PDFs published under the site's static `/pdfs/` directory.

use crate::models::Resource;

/// Returns the nine built-in resources in display order.
pub fn resources() -> Vec<Resource> {
    vec![
        Resource::new(
            1,
            "Basics of Forensic Science",
            "1 Basics of FS.pdf",
            "Fundamental concepts and principles of forensic science, covering the foundation of the field.",
            "Fundamentals",
        ),
        Resource::new(
            2,
            "Principles of Forensic Science",
            "2 Principles of FS_compressed.pdf",
            "Core principles that guide forensic investigations and scientific methodology in crime solving.",
            "Fundamentals",
        ),
        Resource::new(
            3,
            "Branches of Forensic Science",
            "3. Branches of Forensic science_compressed.pdf",
            "Comprehensive overview of different specializations within forensic science.",
            "Fundamentals",
        ),
        Resource::new(
            4,
            "Crime Scenes",
            "4. Crime Scenes (1).pdf",
            "Understanding crime scene dynamics, preservation, and initial response protocols.",
            "Crime Scene",
        ),
        Resource::new(
            5,
            "7 Steps of Crime Scene Investigation",
            "5. 7 Steps of CSI_compressed.pdf",
            "Systematic approach to crime scene investigation following established protocols.",
            "Crime Scene",
        ),
        Resource::new(
            6,
            "The 7 Questions in Crime Investigation",
            "7. The 7 QuestIons In CrIme InvestIgatIon.pdf",
            "Essential investigative framework covering the fundamental questions every forensic investigator must ask.",
            "Investigation",
        ),
        Resource::new(
            7,
            "Sketching Techniques",
            "8. Sketching (1).pdf",
            "Comprehensive guide to crime scene sketching methods and documentation standards.",
            "Documentation",
        ),
        Resource::new(
            8,
            "Note-Making Strategies",
            "9. Note-Making .pdf",
            "Professional note-taking techniques for forensic investigations and court proceedings.",
            "Documentation",
        ),
        Resource::new(
            9,
            "Search Methods",
            "10. Search Methods .pdf",
            "Systematic approaches to crime scene searching and evidence collection methodologies.",
            "Investigation",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_builtin_has_nine_records() {
        assert_eq!(resources().len(), 9);
    }

    #[test]
    fn test_builtin_passes_validation() {
        let catalog = Catalog::new(resources()).expect("built-in data must validate");
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn test_builtin_ids_in_display_order() {
        let ids: Vec<u32> = resources().iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<u32>>());
    }
}
