use chrono::{DateTime, TimeZone, Utc};

use super::{Category, Post};

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

/// Sample posts shown on a fresh board, newest first
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "The Future of Decentralized Forums".into(),
            body: "As we move towards a more decentralized web, forums like ThinkBucks are \
                   paving the way for community-driven discussions that reward quality \
                   content. The token incentive model creates a sustainable ecosystem where \
                   valuable contributions are recognized and rewarded."
                .into(),
            category: Category::Technology,
            author_name: "CryptoEnthusiast".into(),
            author_address: "ST1ABC123DEF456".into(),
            created_at: at(2024, 1, 15, 10, 30),
            like_count: 25,
            comment_count: 8,
            reward_total: 150,
            rewarded: true,
        },
        Post {
            id: 2,
            title: "Building Strong Communities Through Token Incentives".into(),
            body: "Token incentives have revolutionized how we think about online \
                   communities. By directly rewarding quality contributions, we create an \
                   environment where users are motivated to share valuable insights and \
                   engage meaningfully with others."
                .into(),
            category: Category::Community,
            author_name: "CommunityBuilder".into(),
            author_address: "ST1XYZ789ABC123".into(),
            created_at: at(2024, 1, 14, 15, 45),
            like_count: 32,
            comment_count: 12,
            reward_total: 200,
            rewarded: true,
        },
        Post {
            id: 3,
            title: "Best Practices for Quality Content Creation".into(),
            body: "Creating quality content that deserves rewards requires thoughtful \
                   planning, research, and genuine value delivery. Here are some strategies \
                   that have worked well in token-incentivized communities."
                .into(),
            category: Category::Education,
            author_name: "ContentCreator".into(),
            author_address: "ST1DEF456GHI789".into(),
            created_at: at(2024, 1, 13, 9, 15),
            like_count: 18,
            comment_count: 5,
            reward_total: 0,
            rewarded: false,
        },
    ]
}
