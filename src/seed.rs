//! First-run sample teams.

use chrono::Utc;

use crate::tag_set::TagSet;
use crate::types::Team;

/// Returns the three sample teams used to make a fresh board non-empty.
///
/// Seeded only when the stored team collection is absent or empty, and
/// persisted immediately afterwards so a user who removes them does not see
/// them regenerated.
#[must_use]
pub fn sample_teams() -> Vec<Team> {
    let now = Utc::now();

    vec![
        Team {
            id: "1".to_owned(),
            name: "AI Innovation Squad".to_owned(),
            description: "Building an AI-powered solution for healthcare using machine \
                          learning and natural language processing."
                .to_owned(),
            kind: "hackathon".to_owned(),
            size: 5,
            current_size: 2,
            required_skills: TagSet::from_tags(["python", "machine learning", "react", "nodejs"]),
            interests: TagSet::from_tags(["ai", "healthcare", "innovation"]),
            contact_info: "ai-squad@example.com".to_owned(),
            creator: "Alex Chen".to_owned(),
            created_at: now,
        },
        Team {
            id: "2".to_owned(),
            name: "Blockchain Builders".to_owned(),
            description: "Creating a decentralized application for supply chain transparency \
                          using blockchain technology."
                .to_owned(),
            kind: "project".to_owned(),
            size: 4,
            current_size: 3,
            required_skills: TagSet::from_tags(["blockchain", "javascript", "solidity", "web3"]),
            interests: TagSet::from_tags(["blockchain", "crypto", "supply-chain"]),
            contact_info: "blockchain@example.com".to_owned(),
            creator: "Sam Johnson".to_owned(),
            created_at: now,
        },
        Team {
            id: "3".to_owned(),
            name: "Design & Dev Duo".to_owned(),
            description: "Looking for a designer and developer to create a beautiful mobile \
                          app for productivity."
                .to_owned(),
            kind: "startup".to_owned(),
            size: 3,
            current_size: 1,
            required_skills: TagSet::from_tags(["design", "react", "javascript", "ui/ux"]),
            interests: TagSet::from_tags(["mobile", "productivity", "design"]),
            contact_info: "design@example.com".to_owned(),
            creator: "Jordan Smith".to_owned(),
            created_at: now,
        },
    ]
}
