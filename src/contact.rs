//! Site identity and contact links shown in the page header and footer.

use anyhow::Result;
use serde::Serialize;

use crate::config::{Config, SiteConfig};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactLinks {
    pub name: String,
    pub tagline: String,
    pub owner: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl ContactLinks {
    pub fn from_site(site: &SiteConfig) -> Self {
        Self {
            name: site.name.clone(),
            tagline: site.tagline.clone(),
            owner: site.owner.clone(),
            role: site.role.clone(),
            email: site.email.clone(),
            mailto: site.email.as_ref().map(|e| format!("mailto:{}", e)),
            linkedin: site.linkedin.clone(),
        }
    }
}

pub fn run_contact(config: &Config) -> Result<()> {
    let links = ContactLinks::from_site(&config.site);

    println!("{} - {}", links.name, links.tagline);
    println!("{}, {}", links.owner, links.role);
    if let Some(ref mailto) = links.mailto {
        println!("contact:  {}", mailto);
    }
    if let Some(ref url) = links.linkedin {
        println!("linkedin: {}", url);
    }

    Ok(())
}
