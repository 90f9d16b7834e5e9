// src/domain/content.rs
//
// Static copy for the landing page sections.

pub struct PricingTier {
    pub name: &'static str,
    pub tagline: &'static str,
    pub monthly_price: &'static str,
    pub annual_price: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub featured: bool,
}

pub struct Feature {
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub result: &'static str,
    pub quote: &'static str,
}

pub struct Faq {
    pub q: &'static str,
    pub a: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ANNUAL_DISCOUNT: &str = "Save 20%";

pub static PRICING: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        tagline: "Perfect for getting started",
        monthly_price: "1,000",
        annual_price: "800",
        features: &[
            "30 Posts ($33 per clip)",
            "Bi-Monthly Strategy Calls",
            "Social Media Management",
            "Custom Branding",
        ],
        cta: "Start Growing",
        featured: false,
    },
    PricingTier {
        name: "Growth",
        tagline: "For serious growth",
        monthly_price: "2,000",
        annual_price: "1,600",
        features: &[
            "70 Shorts ($28 per clip)",
            "Weekly Strategy Calls",
            "Everything in Starter",
            "Advanced Analytics",
        ],
        cta: "Scale Your Reach",
        featured: true,
    },
    PricingTier {
        name: "Premium",
        tagline: "Maximum viral potential",
        monthly_price: "4,000",
        annual_price: "3,200",
        features: &[
            "150 Clips ($26.6 per clip)",
            "Viral Content Team",
            "Trend Matching",
            "YouTube + TikTok Management",
            "Weekly Growth Reports",
        ],
        cta: "Dominate Your Niche",
        featured: false,
    },
];

pub static FEATURES: &[Feature] = &[
    Feature { title: "AI-Powered Captions", desc: "Automatically generated captions that boost engagement" },
    Feature { title: "Strategic Hook Creation", desc: "Compelling openings that stop the scroll" },
    Feature { title: "Zoom & Jump Cut Editing", desc: "Dynamic editing that keeps viewers engaged" },
    Feature { title: "Custom Brand Watermarks", desc: "Consistent branding across all content" },
    Feature { title: "Trend Analysis & Strategy", desc: "Data-driven content optimization" },
    Feature { title: "Thumbnail Optimization", desc: "Maximize click-through rates" },
];

pub static PROCESS: &[Feature] = &[
    Feature {
        title: "Send Us Your Content",
        desc: "Upload your long-form videos, podcasts, or live streams. We accept all formats and handle the rest.",
    },
    Feature {
        title: "We Create Magic",
        desc: "Our team extracts the best moments, adds viral hooks, captions, and optimizes for each platform.",
    },
    Feature {
        title: "Watch Your Growth",
        desc: "Receive your viral-ready clips and watch your engagement, followers, and revenue soar.",
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        company: "Fitness Coach",
        result: "2.1M views in 30 days",
        quote: "ViralClips transformed our content strategy. The results speak for themselves.",
    },
    Testimonial {
        name: "Mike Chen",
        company: "Tech Reviewer",
        result: "500K new followers",
        quote: "ViralClips transformed our content strategy. The results speak for themselves.",
    },
    Testimonial {
        name: "Emma Davis",
        company: "Business Coach",
        result: "$50K in new revenue",
        quote: "ViralClips transformed our content strategy. The results speak for themselves.",
    },
];

pub static FAQS: &[Faq] = &[
    Faq {
        q: "How quickly do you deliver clips?",
        a: "We deliver your first batch of clips within 48-72 hours, with ongoing deliveries throughout the month.",
    },
    Faq {
        q: "What platforms do you optimize for?",
        a: "We optimize for TikTok, Instagram Reels, YouTube Shorts, and can customize for other platforms upon request.",
    },
    Faq {
        q: "Do you provide analytics?",
        a: "Yes, we provide detailed analytics and performance reports to track your growth and ROI.",
    },
    Faq {
        q: "Can I request revisions?",
        a: "We offer unlimited revisions until you're completely satisfied with your content.",
    },
    Faq {
        q: "What file formats do you need?",
        a: "We accept all major video formats including MP4, MOV, AVI, and can work with raw footage or edited content.",
    },
];

pub static STATS: &[Stat] = &[
    Stat { value: "100M+", label: "Views Generated" },
    Stat { value: "500+", label: "Happy Clients" },
    Stat { value: "$2M+", label: "Client Revenue" },
];
