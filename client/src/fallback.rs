/// Categories the site has pages for.
pub static CATEGORIES: &[&str] = &[
    "politics",
    "technology",
    "sports",
    "business",
    "entertainment",
    "health",
    "science",
    "world",
    "lifestyle",
    "education",
];

/// Placeholder card shown when a category has no stored articles yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackCard {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

/// Filler for the main news grid of a category page.
pub fn grid_fallback(category: &str) -> FallbackCard {
    let (title, description, image) = match category {
        "politics" => (
            "Political News Section",
            "This section will feature the latest political news, government updates, and policy changes. Our political correspondents are working to bring you comprehensive coverage of all political developments.",
            "https://source.unsplash.com/300x200/?politics,government,congress",
        ),
        "technology" => (
            "Technology News Hub",
            "Stay ahead with the latest technology news, startup updates, and digital innovations. We cover everything from AI breakthroughs to the newest gadgets and software releases.",
            "https://source.unsplash.com/300x200/?technology,innovation,startup",
        ),
        "sports" => (
            "Sports News Center",
            "Get the latest sports news, match results, and athlete updates. From football to cricket, we bring you comprehensive coverage of all major sporting events and competitions.",
            "https://source.unsplash.com/300x200/?sports,football,cricket,stadium",
        ),
        "business" => (
            "Business & Finance News",
            "Stay informed about the latest business developments, market trends, and economic news. Our business section covers corporate updates, financial markets, and economic policies.",
            "https://source.unsplash.com/300x200/?business,finance,corporate,office",
        ),
        "entertainment" => (
            "Entertainment News",
            "Discover the latest in entertainment, including movie reviews, celebrity news, music updates, and cultural events. We bring you the glitz and glamour of the entertainment world.",
            "https://source.unsplash.com/300x200/?entertainment,cinema,music,celebrity",
        ),
        "health" => (
            "Health & Wellness News",
            "Stay informed about medical breakthroughs, health tips, and wellness trends. Our health section provides reliable information to help you make informed decisions about your well-being.",
            "https://source.unsplash.com/300x200/?health,medical,wellness,doctor",
        ),
        "science" => (
            "Science & Research News",
            "Explore the fascinating world of science with the latest discoveries, research findings, and technological innovations. We make complex scientific topics accessible and engaging.",
            "https://source.unsplash.com/300x200/?science,research,laboratory,discovery",
        ),
        "world" => (
            "World News Coverage",
            "Stay connected with international affairs, global events, and world news. Our world section brings you stories from every corner of the globe, keeping you informed about global developments.",
            "https://source.unsplash.com/300x200/?world,global,international,earth",
        ),
        "lifestyle" => (
            "Lifestyle & Culture News",
            "Discover the latest in lifestyle trends, cultural events, and social movements. We help you stay in touch with the pulse of modern living and cultural developments.",
            "https://source.unsplash.com/300x200/?lifestyle,culture,fashion,trends",
        ),
        "education" => (
            "Education News & Updates",
            "Stay informed about educational policies, learning trends, and academic achievements. Our education section supports your journey of lifelong learning and academic growth.",
            "https://source.unsplash.com/300x200/?education,school,university,learning",
        ),
        _ => (
            "News Section Coming Soon",
            "This section will feature the latest news and updates. Our team is working to bring you comprehensive coverage of all the important stories.",
            "https://source.unsplash.com/300x200/?news,newspaper,media",
        ),
    };

    FallbackCard {
        title,
        description,
        image,
    }
}

/// Filler for the trending rail of a category page.
pub fn trending_fallback(category: &str) -> FallbackCard {
    let (title, description, image) = match category {
        "politics" => (
            "Political Updates Coming Soon",
            "Stay informed about the latest political developments and government policies.",
            "https://source.unsplash.com/300x200/?politics,government",
        ),
        "technology" => (
            "Tech Trends on the Horizon",
            "Get ready for the latest technology innovations and digital breakthroughs.",
            "https://source.unsplash.com/300x200/?technology,innovation",
        ),
        "sports" => (
            "Sports Highlights Loading",
            "Prepare for exciting sports coverage and match analysis.",
            "https://source.unsplash.com/300x200/?sports,football",
        ),
        "business" => (
            "Business News Incoming",
            "Stay ahead with the latest business insights and market trends.",
            "https://source.unsplash.com/300x200/?business,finance",
        ),
        "entertainment" => (
            "Entertainment Buzz Building",
            "Get ready for the latest in movies, music, and celebrity news.",
            "https://source.unsplash.com/300x200/?entertainment,cinema",
        ),
        "health" => (
            "Health Updates Coming",
            "Stay informed about medical breakthroughs and wellness tips.",
            "https://source.unsplash.com/300x200/?health,medical",
        ),
        "science" => (
            "Scientific Discoveries Await",
            "Explore the latest in scientific research and innovations.",
            "https://source.unsplash.com/300x200/?science,research",
        ),
        "world" => (
            "Global News Coverage",
            "Stay connected with international affairs and world events.",
            "https://source.unsplash.com/300x200/?world,global",
        ),
        "lifestyle" => (
            "Lifestyle Trends Emerging",
            "Discover the latest in lifestyle and cultural movements.",
            "https://source.unsplash.com/300x200/?lifestyle,culture",
        ),
        "education" => (
            "Educational Insights Loading",
            "Stay informed about learning trends and academic achievements.",
            "https://source.unsplash.com/300x200/?education,school",
        ),
        _ => (
            "News Updates Coming Soon",
            "Stay tuned for the latest news and developments.",
            "https://source.unsplash.com/300x200/?news,newspaper",
        ),
    };

    FallbackCard {
        title,
        description,
        image,
    }
}
