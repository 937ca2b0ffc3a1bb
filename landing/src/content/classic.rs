use super::*;

pub static CLASSIC: SiteContent = SiteContent {
    variant: Variant::Classic,
    meta: PageMeta {
        title: "Iron Living | Train Hard. Live Free.",
        description: "Train for real life. Personal training that builds endurance, strength, and grit — online or in-person.",
        viewport: "width=device-width, initial-scale=1",
        author: "Iron Living",
        favicon: "/favicon-iron.png",
    },
    theme: Theme {
        bg_from: "#000000",
        bg_via: "#18181B",
        bg_to: "#171717",
        accent: "#E6B800",
        cta: "#DC2626",
        cta_hover: "#B91C1C",
        link: "#F87171",
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
        headline_lead: "Train Hard.",
        headline_accent: "Live Free.",
        tagline: "Functional strength. Mountain grit. Real training for real life — from snow to summit.",
        cta_label: "Apply for Coaching",
    },
    about: AboutCopy {
        heading: "What is Iron Living?",
        body: "Created by Zach, Iron Living is about building strength that shows up outside the gym — climbing mountains, pushing through miles, staying ready for anything. This isn’t about beach muscles. It’s about functional freedom.",
    },
    features: &[
        Feature {
            title: "1-on-1 Coaching",
            description: "Work directly with Zach to get a program built around your real-life goals.",
        },
        Feature {
            title: "Endurance & Trail Prep",
            description: "Conditioning and mobility to prepare for trail runs, hikes, and peak-bagging.",
        },
        Feature {
            title: "Functional Strength",
            description: "Train to move better, perform longer, and recover faster.",
        },
        Feature {
            title: "Outdoor Conditioning",
            description: "Real movement. Real terrain. Zach’s programs don’t live in a spreadsheet.",
        },
        Feature {
            title: "Mobility + Core",
            description: "Stay injury-free with routines that support your spine, joints, and posture.",
        },
        Feature {
            title: "Online Training",
            description: "Full virtual support if you can’t train in person — weekly check-ins and form reviews.",
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
                quote: "I train to summit peaks, not just squat racks. Zach gets it. Real results for real life.",
            },
            Testimonial {
                name: "Kyle T.",
                title: "Marathoner",
                quote: "The endurance programming is next level. I’ve hit PRs without wrecking my joints.",
            },
            Testimonial {
                name: "Olivia B.",
                title: "Weekend Warrior",
                quote: "I never liked gyms, but Zach’s style made me love training again. Highly recommend.",
            },
        ],
    },
    video: VideoSection {
        heading: "Zach In Action",
        media: VideoEmbed::Hosted {
            title: "Iron Living Video",
            src: "https://www.youtube.com/embed/dQw4w9WgXcQ",
        },
    },
    application: ApplicationEmbed {
        heading: "Apply for Coaching",
        frame_title: "Coaching Application Form",
        src: "https://form.jotform.com/251482303686156",
        height: "600",
    },
    footer: FooterCopy {
        owner: "Iron Living",
        credit_label: "Built Simple",
        credit_href: "mailto:info@built-simple.ai",
    },
};
