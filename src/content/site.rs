use crate::models::{AboutTab, ContactInfo, Event, Service, TeamMember};

/// Inert page content for every view except the tip catalog. The state model
/// never inspects it; only the renderer reads it.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub name: String,
    pub tagline: String,
    pub services: Vec<Service>,
    pub call_to_action: String,
    pub team: Vec<TeamMember>,
    pub events: Vec<Event>,
    pub contact: ContactInfo,
}

impl SiteContent {
    /// Content shipped with the site.
    pub fn seed() -> Self {
        Self {
            name: "Suwanee Health Hub".to_string(),
            tagline: "Your journey to a healthier lifestyle starts here".to_string(),
            services: vec![
                service(
                    "Health Events",
                    "Join our community events focused on wellness and fitness.",
                ),
                service(
                    "Expert Guidance",
                    "Get personalized advice from our team of health professionals.",
                ),
                service(
                    "Lifestyle Tips",
                    "Discover daily tips to improve your overall well-being.",
                ),
            ],
            call_to_action:
                "Join Suwanee Health Hub today and start your journey to a healthier you."
                    .to_string(),
            team: vec![
                member(
                    "Dr. Sarah Johnson",
                    "Nutritionist",
                    "Dr. Johnson has over 15 years of experience in nutrition and dietary planning.",
                ),
                member(
                    "Mike Thompson",
                    "Fitness Instructor",
                    "Mike is a certified personal trainer with a passion for helping clients achieve their fitness goals.",
                ),
                member(
                    "Emily Chen",
                    "Mental Health Counselor",
                    "Emily specializes in stress management and mindfulness techniques.",
                ),
                member(
                    "David Rodriguez",
                    "Wellness Coach",
                    "David takes a holistic approach to health, focusing on both physical and mental well-being.",
                ),
            ],
            events: vec![
                event(
                    "Saturday mornings",
                    "Community Walk",
                    "Suwanee Town Center Park",
                    "An easy-paced group walk open to all fitness levels.",
                ),
                event(
                    "First Tuesday monthly",
                    "Healthy Cooking Workshop",
                    "Health Hub kitchen",
                    "Hands-on session on quick, balanced weeknight meals.",
                ),
                event(
                    "Third Thursday monthly",
                    "Mindfulness Circle",
                    "Health Hub studio",
                    "Guided meditation and breathing practice to manage stress.",
                ),
            ],
            contact: ContactInfo {
                address: "123 Wellness Street, Suwanee, GA 30024".to_string(),
                email: "info@suwaneehealthhub.com".to_string(),
                phone: "(770) 555-0123".to_string(),
            },
        }
    }

    /// Body text for an about-page tab.
    pub fn about_text(&self, tab: AboutTab) -> &'static str {
        match tab {
            AboutTab::Mission => "At Suwanee Health Hub, our mission is to empower individuals to take control of their health and well-being through education, support, and community engagement.",
            AboutTab::Values => "We believe in integrity, compassion, and innovation. Our team is committed to providing the highest quality of care and guidance to our community.",
            AboutTab::Impact => "Since our founding, we've helped thousands of individuals achieve their health goals, fostering a healthier and happier Suwanee community.",
        }
    }
}

fn service(title: &str, description: &str) -> Service {
    Service {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn member(name: &str, role: &str, bio: &str) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        bio: bio.to_string(),
    }
}

fn event(date: &str, title: &str, location: &str, description: &str) -> Event {
    Event {
        date: date.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        description: description.to_string(),
    }
}
