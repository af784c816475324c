//! Read-only view models for the terms and dashboard pages.

use hs_core::entities::{Team, User};
use hs_core::enums::{ArtifactSlot, PortalVariant};
use serde::Serialize;

use crate::forms::FieldErrors;
use crate::forms::dashboard::SubmissionDraft;

/// A titled block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub body: &'static str,
}

/// A label/value pair for the event information table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const GUIDELINES: [Section; 4] = [
    Section {
        title: "Registration & Team Formation",
        body: "Complete your registration and form teams of up to 4 members. All team members must be registered on the platform.",
    },
    Section {
        title: "Project Development",
        body: "Build your innovative project within the hackathon timeframe. Focus on creativity, functionality, and user experience.",
    },
    Section {
        title: "Submission Requirements",
        body: "Upload your project files, complete documentation, and a demo video. Ensure all files are properly packaged in supported formats.",
    },
    Section {
        title: "Judging Criteria",
        body: "Projects will be evaluated on innovation (30%), technical execution (30%), design quality (20%), and presentation (20%).",
    },
];

pub const EVENT_INFO: [Stat; 4] = [
    Stat { label: "Duration", value: "48 Hours" },
    Stat { label: "Deadline", value: "Feb 6, 11:59 PM" },
    Stat { label: "Participants", value: "1,247" },
    Stat { label: "Prize Pool", value: "$50,000" },
];

pub const SUBMISSION_CHECKLIST: [&str; 4] = [
    "Include a comprehensive README with setup instructions",
    "Provide a valid GitHub repository URL with your source code",
    "Upload a demo video showcasing your project's key features",
    "Document all dependencies and environment setup details",
];

pub const TERMS_SECTIONS: [Section; 9] = [
    Section {
        title: "1. Introduction",
        body: "Welcome to HackSphere. By participating in this hackathon, you agree to abide by these terms and conditions. Please read them carefully before proceeding with your registration.",
    },
    Section {
        title: "2. Eligibility",
        body: "Participants must be at least 13 years old to enter. Teams can consist of 1-4 members. All team members must register individually and agree to these terms. Participants from all countries are welcome unless restricted by local laws.",
    },
    Section {
        title: "3. Project Guidelines",
        body: "All projects must be original work created during the hackathon period. Use of existing libraries, frameworks, and APIs is permitted, but the core innovation must be new. Projects must not violate any intellectual property rights or contain malicious code.",
    },
    Section {
        title: "4. Code of Conduct",
        body: "All participants must maintain a respectful and inclusive environment. Harassment, discrimination, or inappropriate behavior of any kind will result in immediate disqualification. Be kind, be collaborative, and support fellow hackers in their journey.",
    },
    Section {
        title: "5. Intellectual Property",
        body: "You retain all rights to your project and code. By submitting your project, you grant HackSphere a non-exclusive license to showcase your work in promotional materials, on our platform, and in related media coverage.",
    },
    Section {
        title: "6. Judging & Prizes",
        body: "Projects will be evaluated based on innovation (30%), technical implementation (30%), design and user experience (20%), and presentation quality (20%). Judge decisions are final. Prize distribution will occur within 30 days of the event conclusion.",
    },
    Section {
        title: "7. Liability",
        body: "HackSphere and its organizers are not responsible for any technical issues, loss of data, injuries, or damages during the event. Participants join at their own risk and should maintain regular backups of their work.",
    },
    Section {
        title: "8. Privacy & Data Protection",
        body: "Your registration information will be used solely for hackathon purposes and will not be shared with third parties without your explicit consent. Project submissions may be made public on our platform. We comply with GDPR and other relevant data protection regulations.",
    },
    Section {
        title: "9. Changes to Terms",
        body: "HackSphere reserves the right to modify these terms at any time. Participants will be notified of significant changes via email. Continued participation constitutes acceptance of updated terms.",
    },
];

pub const TERMS_AGREEMENT: &str = "I have read and agree to the Terms & Conditions and understand my rights and responsibilities as a participant in HackSphere.";

#[derive(Debug, Clone, Serialize)]
pub struct TermsView {
    pub title: &'static str,
    pub sections: &'static [Section],
    pub agreement: &'static str,
    pub accepted: bool,
}

impl TermsView {
    #[must_use]
    pub const fn new(accepted: bool) -> Self {
        Self {
            title: "Terms & Conditions",
            sections: &TERMS_SECTIONS,
            agreement: TERMS_AGREEMENT,
            accepted,
        }
    }
}

/// Team card, shown only for group registrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamCard {
    pub name: String,
    pub size: u8,
    pub status: &'static str,
}

impl TeamCard {
    #[must_use]
    pub fn for_team(team: &Team) -> Option<Self> {
        team.is_group.then(|| Self {
            name: team.name.clone(),
            size: team.size,
            status: "Active",
        })
    }
}

/// One artifact slot as shown on the submission card.
#[derive(Debug, Clone, Serialize)]
pub struct SlotView {
    pub slot: ArtifactSlot,
    pub file: Option<String>,
    pub size: Option<String>,
    pub uploading: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DraftView {
    pub github_link: String,
    pub slots: Vec<SlotView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub errors: FieldErrors,
}

impl DraftView {
    #[must_use]
    pub fn from_draft(draft: &SubmissionDraft, variant: PortalVariant) -> Self {
        let mut slots = vec![ArtifactSlot::ProjectFile, ArtifactSlot::DemoVideo];
        if variant.has_dataset_field() {
            slots.push(ArtifactSlot::Dataset);
        }
        Self {
            github_link: draft.github_link().to_string(),
            slots: slots
                .into_iter()
                .map(|slot| {
                    let artifact = draft.artifact(slot);
                    SlotView {
                        slot,
                        file: artifact.map(|a| a.file.name.clone()),
                        size: artifact.map(|a| a.file.display_size()),
                        uploading: draft.is_uploading(slot),
                    }
                })
                .collect(),
            note: variant
                .has_note_field()
                .then(|| draft.note().to_string()),
            errors: draft.errors().clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub welcome: String,
    pub variant: PortalVariant,
    pub guidelines: &'static [Section],
    pub event_info: &'static [Stat],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamCard>,
    pub checklist: &'static [&'static str],
    pub draft: DraftView,
}

impl DashboardView {
    #[must_use]
    pub fn new(
        user: &User,
        team: Option<&Team>,
        draft: &SubmissionDraft,
        variant: PortalVariant,
    ) -> Self {
        Self {
            welcome: format!("Welcome back, {}!", user.name),
            variant,
            guidelines: &GUIDELINES,
            event_info: &EVENT_INFO,
            team: team.and_then(TeamCard::for_team),
            checklist: &SUBMISSION_CHECKLIST,
            draft: DraftView::from_draft(draft, variant),
        }
    }
}
