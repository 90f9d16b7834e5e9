// src/domain/video.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Tiktok,
    Instagram,
    Youtube,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Tiktok, Platform::Instagram, Platform::Youtube];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Tiktok => "tiktok",
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Tiktok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::Youtube => "YouTube",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSummary {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub platform: Platform,
    pub category: &'static str,
    pub views: &'static str,
    pub likes: &'static str,
    pub comments: &'static str,
    pub engagement_rate: &'static str,
    pub thumbnail: &'static str,
    pub embed_url: &'static str,
    pub client: &'static str,
    pub results: &'static [&'static str],
}

pub static VIDEO_CATALOG: &[VideoSummary] = &[
    VideoSummary {
        id: 1,
        title: "The Forgotten Empire Nobody Talks About",
        description: "A two-hour history lecture cut down to a 58-second hook-first short.",
        platform: Platform::Youtube,
        category: "History",
        views: "28M",
        likes: "1.9M",
        comments: "41K",
        engagement_rate: "7.1%",
        thumbnail: "https://img.youtube.com/vi/EVwW0h6tzJM/hqdefault.jpg",
        embed_url: "https://www.youtube.com/embed/EVwW0h6tzJM",
        client: "History Unplugged Podcast",
        results: &[
            "28M views in the first month",
            "+310K subscribers",
            "Channel monetized within 3 weeks",
        ],
    },
    VideoSummary {
        id: 2,
        title: "The Debate Moment Everyone Replayed",
        description: "Live stream highlight reframed with captions and a cold open.",
        platform: Platform::Youtube,
        category: "Politics",
        views: "27M",
        likes: "1.2M",
        comments: "88K",
        engagement_rate: "4.8%",
        thumbnail: "https://img.youtube.com/vi/TeMxrvBo2Wo/hqdefault.jpg",
        embed_url: "https://www.youtube.com/embed/TeMxrvBo2Wo",
        client: "Open Floor Live",
        results: &["27M views", "Top 10 trending in category", "+120K followers"],
    },
    VideoSummary {
        id: 3,
        title: "What the Budget Actually Means for You",
        description: "Policy explainer condensed into three jump-cut beats.",
        platform: Platform::Youtube,
        category: "Politics",
        views: "7M",
        likes: "402K",
        comments: "19K",
        engagement_rate: "6.0%",
        thumbnail: "https://img.youtube.com/vi/0s_GzmOdqMM/hqdefault.jpg",
        embed_url: "https://www.youtube.com/embed/0s_GzmOdqMM",
        client: "Civic Minute",
        results: &["7M views", "Average watch time 94%"],
    },
    VideoSummary {
        id: 4,
        title: "My 5AM Routine, Honestly",
        description: "Vlog footage re-edited into a fast-paced vertical story.",
        platform: Platform::Tiktok,
        category: "Lifestyle",
        views: "3.2M",
        likes: "380K",
        comments: "6.1K",
        engagement_rate: "12.1%",
        thumbnail: "https://img.youtube.com/vi/pK2I9yZszCw/hqdefault.jpg",
        embed_url: "https://www.youtube.com/embed/pK2I9yZszCw",
        client: "Sarah Johnson, Fitness Coach",
        results: &["2.1M views in 30 days", "+85K followers", "Brand deal signed"],
    },
    VideoSummary {
        id: 5,
        title: "How I Priced My First $10K Offer",
        description: "Podcast clip with kinetic captions and a branded watermark.",
        platform: Platform::Instagram,
        category: "Business",
        views: "2.6M",
        likes: "210K",
        comments: "9.4K",
        engagement_rate: "8.4%",
        thumbnail: "https://img.youtube.com/vi/4pHdboqCmXY/hqdefault.jpg",
        embed_url: "https://www.youtube.com/embed/4pHdboqCmXY",
        client: "Emma Davis, Business Coach",
        results: &["$50K in new revenue", "Waitlist filled in 48 hours"],
    },
    VideoSummary {
        id: 6,
        title: "Why Nobody Talks to Their Neighbors Anymore",
        description: "Street interview cut into a looping reel.",
        platform: Platform::Instagram,
        category: "Society",
        views: "2.3M",
        likes: "175K",
        comments: "12K",
        engagement_rate: "8.1%",
        thumbnail: "https://img.youtube.com/vi/mEuQ0jFTOjo/hqdefault.jpg",
        embed_url: "https://www.youtube.com/embed/mEuQ0jFTOjo",
        client: "Mike Chen, Tech Reviewer",
        results: &["500K new followers", "Shared 60K times"],
    },
];

pub fn find_video(id: u32) -> Option<&'static VideoSummary> {
    VIDEO_CATALOG.iter().find(|v| v.id == id)
}

/// Videos for the showcase grid; `None` means every platform.
pub fn videos_for(platform: Option<Platform>) -> Vec<&'static VideoSummary> {
    VIDEO_CATALOG
        .iter()
        .filter(|v| platform.map_or(true, |p| v.platform == p))
        .collect()
}

/// Open/closed state of the video detail modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoViewer {
    #[default]
    Closed,
    Open(&'static VideoSummary),
}

impl VideoViewer {
    /// Opens on the catalog entry; an unknown id leaves the viewer closed.
    pub fn open(id: u32) -> Self {
        find_video(id).map_or(VideoViewer::Closed, VideoViewer::Open)
    }

    pub fn selected(&self) -> Option<&'static VideoSummary> {
        match self {
            VideoViewer::Open(video) => Some(video),
            VideoViewer::Closed => None,
        }
    }
}
