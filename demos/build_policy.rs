//! Builds a policy for a site pulling CSS and fonts from public CDNs and
//! prints the full header line.
//!
//! Run with: cargo run --example build_policy

use csp_builder::{
    CspError, DirectivesMap, Policy, DATA, DEFAULT_SRC, FONT_SRC, HEADER, HTTPS, IMG_SRC, SELF,
    STYLE_SRC,
};

fn main() -> Result<(), CspError> {
    // Initial values can be supplied up front for each directive.
    let mut policy = Policy::from(DirectivesMap::from([
        (DEFAULT_SRC.to_string(), vec![SELF.to_string()]),
        (
            IMG_SRC.to_string(),
            vec![SELF.to_string(), DATA.to_string(), HTTPS.to_string()],
        ),
    ]));

    // Bootstrap
    policy.add(FONT_SRC, vec!["https://maxcdn.bootstrapcdn.com"])?;
    policy.add(STYLE_SRC, vec!["https://maxcdn.bootstrapcdn.com"])?;

    // Google Fonts
    policy.add(FONT_SRC, vec!["https://fonts.googleapis.com"])?;
    policy.add(FONT_SRC, vec!["https://fonts.gstatic.com"])?;
    policy.add(STYLE_SRC, vec!["https://fonts.googleapis.com"])?;

    // Ready to store in a response header.
    println!("{}: {}", HEADER, policy);
    Ok(())
}
