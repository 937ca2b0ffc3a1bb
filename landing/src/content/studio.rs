use super::*;

pub static STUDIO: SiteContent = SiteContent {
    variant: Variant::Studio,
    meta: PageMeta {
        title: "Iron Living | Strength That Travels.",
        description: "Coaching for people who live outside. Strength, endurance, and mobility programs — in the studio or wherever you train.",
        viewport: "width=device-width, initial-scale=1",
        author: "Iron Living",
        favicon: "/favicon-iron.png",
    },
    theme: Theme {
        bg_from: "#0B1120",
        bg_via: "#111827",
        bg_to: "#0F172A",
        accent: "#F59E0B",
        cta: "#EA580C",
        cta_hover: "#C2410C",
        link: "#FDBA74",
    },
    brand: Brand {
        logo: Image {
            src: "/ironliving-logo.png",
            alt: "Iron Living Logo",
            width: Some(140),
            height: Some(60),
        },
        apply_label: "Apply",
    },
    hero: HeroCopy {
        headline_lead: "Strength That",
        headline_accent: "Travels.",
        tagline: "Lift in the studio, carry it up the mountain. Coaching built for the life you actually live.",
        cta_label: "Apply for Coaching",
    },
    about: AboutCopy {
        heading: "What is Iron Living?",
        body: "Iron Living is Zach’s coaching practice for people who want their training to pay off outdoors — on the trail, on the slopes, and on long days that ask for more than a pretty physique.",
    },
    features: &[
        Feature {
            title: "1-on-1 Coaching",
            description: "A program written around your calendar, your terrain, and your goals.",
        },
        Feature {
            title: "Studio Sessions",
            description: "In-person strength blocks with hands-on coaching and form work.",
        },
        Feature {
            title: "Functional Strength",
            description: "Build power you can use: carries, hinges, pulls, and single-leg work.",
        },
        Feature {
            title: "Trail Conditioning",
            description: "Engine work for long climbs and longer descents.",
        },
        Feature {
            title: "Mobility + Core",
            description: "Short daily routines that keep hips, shoulders, and spine moving well.",
        },
        Feature {
            title: "Online Training",
            description: "Remote programming with weekly check-ins and video form reviews.",
        },
    ],
    gallery: Gallery {
        heading: "From the Gram",
        images: &[
            Image {
                src: "/ig-1.jpg",
                alt: "Instagram Post 1",
                width: None,
                height: None,
            },
            Image {
                src: "/ig-2.jpg",
                alt: "Instagram Post 2",
                width: None,
                height: None,
            },
            Image {
                src: "/ig-3.jpg",
                alt: "Instagram Post 3",
                width: None,
                height: None,
            },
        ],
        follow: SocialLink {
            label: "Follow Zach at",
            handle: "@ironlivingzach",
            url: "https://instagram.com/ironlivingzach",
        },
    },
    testimonials: Testimonials {
        heading: "What Clients Say",
        items: &[
            Testimonial {
                name: "Mason H.",
                title: "Outdoor Athlete",
                quote: "My legs finally keep up with my plans. Zach programs for the mountain, not the mirror.",
            },
            Testimonial {
                name: "Kyle T.",
                title: "Marathoner",
                quote: "Strength work that made me faster instead of sore. Best block I’ve run.",
            },
            Testimonial {
                name: "Olivia B.",
                title: "Weekend Warrior",
                quote: "Friendly, focused, and no ego. I look forward to every session.",
            },
        ],
    },
    video: VideoSection {
        heading: "Zach In Action",
        media: VideoEmbed::File {
            src: "/demo-video.mp4",
            poster: None,
        },
    },
    application: ApplicationEmbed {
        heading: "Apply for Coaching",
        frame_title: "Coaching Application Form",
        src: "https://form.jotform.com/251482303686157",
        height: "600",
    },
    footer: FooterCopy {
        owner: "Iron Living",
        credit_label: "Built Simple",
        credit_href: "mailto:info@built-simple.ai",
    },
};
