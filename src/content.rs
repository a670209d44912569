//! Everything the page says, as literal tables in display order.

use crate::components::icon::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Home,
    About,
    PracticeAreas,
    Team,
    Insights,
    Testimonials,
    Faq,
    Contact,
}

impl Anchor {
    /// Top-to-bottom order of the anchored sections inside `<main>`.
    pub const PAGE_ORDER: [Anchor; 8] = [
        Anchor::Home,
        Anchor::About,
        Anchor::PracticeAreas,
        Anchor::Team,
        Anchor::Insights,
        Anchor::Testimonials,
        Anchor::Faq,
        Anchor::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::PracticeAreas => "practice-areas",
            Anchor::Team => "team",
            Anchor::Insights => "insights",
            Anchor::Testimonials => "testimonials",
            Anchor::Faq => "faq",
            Anchor::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

pub const FIRM_NAME: &str = "A. Muchemi Muthee & Co. Advocates";
pub const MOTTO: &str = "Res ipsa loquitur.";

pub const LOGO_SRC: &str = "/logo.png";
pub const HERO_IMAGE: &str = "/nairobi-skyline.jpg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub target: Anchor,
}

impl NavLink {
    pub fn href(&self) -> String {
        self.target.href()
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", target: Anchor::Home },
    NavLink { name: "About Us", target: Anchor::About },
    NavLink { name: "Practice Areas", target: Anchor::PracticeAreas },
    NavLink { name: "Our Team", target: Anchor::Team },
    NavLink { name: "Insights", target: Anchor::Insights },
    NavLink { name: "FAQ", target: Anchor::Faq },
    NavLink { name: "Contact", target: Anchor::Contact },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const VALUES: &[ValueItem] = &[
    ValueItem {
        title: "Integrity",
        description: "Upholding the highest ethical standards, ensuring transparency, honesty, and fairness in all our dealings.",
        icon: Icon::CheckCircle,
    },
    ValueItem {
        title: "Client-Centric",
        description: "Our clients' needs are at the core of our decision-making, prioritizing and meeting their unique requirements.",
        icon: Icon::Users,
    },
    ValueItem {
        title: "Collaboration",
        description: "Believing in the power of collaboration, working seamlessly with our clients to achieve shared goals.",
        icon: Icon::Briefcase,
    },
    ValueItem {
        title: "Professionalism",
        description: "Maintaining a high level of professionalism in all interactions, ensuring respect, courtesy, and diligence.",
        icon: Icon::Scale,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PracticeArea {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const PRACTICE_AREAS: &[PracticeArea] = &[
    PracticeArea {
        title: "Constitutional Law",
        description: "Interpreting the constitution, addressing government structure, and fundamental rights.",
        icon: Icon::Scale,
    },
    PracticeArea {
        title: "Public Interest Litigation",
        description: "Handling legal matters involving government entities and regulatory compliance.",
        icon: Icon::Users,
    },
    PracticeArea {
        title: "Commercial Law",
        description: "Supporting businesses from contract drafting and negotiation to dispute resolution.",
        icon: Icon::Briefcase,
    },
    PracticeArea {
        title: "Legislative Drafting",
        description: "Specializing in policy formulation and drafting sound policies, Bills, & Regulations.",
        icon: Icon::PenTool,
    },
    PracticeArea {
        title: "Land Law",
        description: "Navigating property rights, land transactions, disputes, and conveyancing.",
        icon: Icon::Home,
    },
    PracticeArea {
        title: "Electoral Law & Disputes",
        description: "Advising on election laws and representing clients in electoral disputes.",
        icon: Icon::Vote,
    },
    PracticeArea {
        title: "Intellectual Property Law",
        description: "Safeguarding innovations by securing and enforcing trademarks, copyrights, and patents.",
        icon: Icon::Lightbulb,
    },
    PracticeArea {
        title: "Employment Law",
        description: "Legal support for employers and employees, from contracts to HR policies.",
        icon: Icon::Briefcase,
    },
    PracticeArea {
        title: "County Governments",
        description: "Assisting clients in navigating development approvals, payments, and notices.",
        icon: Icon::Building,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub portrait: &'static str,
    pub credentials: &'static str,
    pub experience: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Alexander Muchemi Muthee",
        role: "Lead Partner & Founder",
        portrait: "/muchemi.png",
        credentials: "Admitted in 2014, holds an LLB (Hons) from Moi University, a Post-Graduate Diploma in Project Management, and is a Certified PPP Professional.",
        experience: "Extensive experience in private practice and as a pioneer County Attorney for Laikipia County. Member of the LSK and Amnesty International.",
    },
    TeamMember {
        name: "Emmanuel Moses Wachira Muthee",
        role: "Associate",
        portrait: "/mose.png",
        credentials: "Admitted in 2021, holds an LLB (Hons) from the University of Nairobi and is an LLM candidate in IP and Technology Law. An admitted Patent Agent with KIPI.",
        experience: "Active experience in litigation across land, family, constitutional, commercial, and employment law, with a special interest in Technology Transfer and IP.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsightArticle {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub href: &'static str,
}

pub const INSIGHTS: &[InsightArticle] = &[
    InsightArticle {
        category: "Commercial Law",
        title: "Navigating the 2024 Kenyan Data Protection Act Amendments",
        description: "The latest amendments introduce significant changes for businesses. We break down what you need to know to stay compliant.",
        image: "https://placehold.co/600x400/1e293b/eab308?text=Legal+Update",
        href: "#",
    },
    InsightArticle {
        category: "Land Law",
        title: "E-Conveyancing in Kenya: Progress and Pitfalls",
        description: "The digitization of land transactions promises efficiency, but new challenges have emerged. Here is our expert analysis.",
        image: "https://placehold.co/600x400/1e293b/eab308?text=Property+Law",
        href: "#",
    },
    InsightArticle {
        category: "Intellectual Property",
        title: "Protecting Your Brand: A Guide to Trademarks in East Africa",
        description: "Your brand is your most valuable asset. Learn the essential steps for trademark registration and protection in the EAC.",
        image: "https://placehold.co/600x400/1e293b/eab308?text=IP+Law",
        href: "#",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLine {
    pub text: &'static str,
    pub href: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub title: &'static str,
    pub lines: &'static [ContactLine],
    pub icon: Icon,
}

pub const OFFICE_ADDRESS: &str = "Room T14, Premier Northpark Building, Eastern Bypass, Ruiru, Kenya.";
pub const PRIMARY_PHONE: ContactLine = ContactLine {
    text: "+254 722 746 293",
    href: Some("tel:+254722746293"),
};
pub const EMAIL: ContactLine = ContactLine {
    text: "info@muchemilaw.com",
    href: Some("mailto:info@muchemilaw.com"),
};

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Our Office",
        lines: &[
            ContactLine { text: "Room T14, Premier Northpark Building,", href: None },
            ContactLine { text: "Eastern Bypass, Ruiru, Kenya.", href: None },
        ],
        icon: Icon::MapPin,
    },
    ContactChannel {
        title: "Call Us",
        lines: &[
            PRIMARY_PHONE,
            ContactLine { text: "+254 714 094 094", href: Some("tel:+254714094094") },
        ],
        icon: Icon::Phone,
    },
    ContactChannel {
        title: "Email Us",
        lines: &[EMAIL],
        icon: Icon::Mail,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What should I expect during my first consultation?",
        answer: "Your first consultation is an opportunity for us to understand your legal issue in detail. You should bring any relevant documents, and we will provide an initial assessment of your case, discuss potential strategies, and outline the next steps. This meeting is confidential.",
    },
    FaqEntry {
        question: "How are your legal fees structured?",
        answer: "We offer transparent and flexible fee structures tailored to your needs. This can include fixed fees for specific services (like conveyancing or contracts), hourly rates for complex litigation, or retainers for ongoing corporate advisory. We will discuss and agree on all fees upfront before any work begins.",
    },
    FaqEntry {
        question: "What is a Commissioner for Oaths and a Notary Public?",
        answer: "A Commissioner for Oaths is authorized to administer oaths and take affidavits (sworn statements) for use in legal proceedings in Kenya. A Notary Public has additional authority to certify and authenticate documents for use internationally, such as academic certificates, corporate documents, or property deeds.",
    },
    FaqEntry {
        question: "Do you handle cases outside of Nairobi and Ruiru?",
        answer: "Yes. While our primary office is in Ruiru, we represent clients across Kenya. We are equipped to handle matters in various High Courts and Magistrate's Courts throughout the country, leveraging technology and our professional networks to provide seamless representation.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_ids_are_unique_and_hrefs_are_fragments() {
        let mut ids: Vec<_> = Anchor::PAGE_ORDER.iter().map(|a| a.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Anchor::PAGE_ORDER.len());
        assert_eq!(Anchor::PracticeAreas.href(), "#practice-areas");
    }

    #[test]
    fn nav_links_point_at_page_sections() {
        assert_eq!(NAV_LINKS.len(), 7);
        for link in NAV_LINKS {
            assert!(Anchor::PAGE_ORDER.contains(&link.target), "{}", link.name);
            assert!(link.href().starts_with('#'));
        }
        assert_eq!(NAV_LINKS.last().map(NavLink::href).as_deref(), Some("#contact"));
    }

    #[test]
    fn practice_areas_keep_display_order() {
        let titles: Vec<_> = PRACTICE_AREAS.iter().map(|a| a.title).collect();
        assert_eq!(titles.first(), Some(&"Constitutional Law"));
        assert_eq!(titles.get(4), Some(&"Land Law"));
        assert_eq!(titles.last(), Some(&"County Governments"));
        assert_eq!(titles.len(), 9);
    }

    #[test]
    fn contact_links_use_tel_or_mailto() {
        let hrefs: Vec<_> = CONTACT_CHANNELS
            .iter()
            .flat_map(|c| c.lines.iter())
            .filter_map(|l| l.href)
            .collect();
        assert_eq!(hrefs.len(), 3);
        assert!(hrefs.iter().all(|h| h.starts_with("tel:") || h.starts_with("mailto:")));
    }

    #[test]
    fn faq_has_four_entries() {
        assert_eq!(FAQS.len(), 4);
        assert!(FAQS.iter().all(|f| f.question.ends_with('?')));
    }
}
