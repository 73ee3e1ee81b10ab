//! Static security-awareness learning modules.

use crate::error::GuardianError;

/// Percentage points of progress gained each time a module is opened.
pub const MODULE_PROGRESS_STEP: u8 = 25;

/// A titled list of points within a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub points: &'static [&'static str],
}

/// A learning module: title, introduction and sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearningModule {
    pub id: &'static str,
    pub title: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
    pub sections: &'static [Section],
}

impl LearningModule {
    /// Render as plain text for a terminal.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n\n{}\n\n{}\n", self.title, self.headline, self.intro);
        for section in self.sections {
            out.push('\n');
            out.push_str(section.heading);
            out.push('\n');
            for point in section.points {
                out.push_str("  - ");
                out.push_str(point);
                out.push('\n');
            }
        }
        out
    }
}

pub static MODULES: [LearningModule; 3] = [
    LearningModule {
        id: "phishing",
        title: "Phishing Awareness",
        headline: "Understanding Phishing Attacks",
        intro: "Phishing is a cybercrime in which targets are contacted by email, telephone, \
                or text message by someone posing as a legitimate institution to lure individuals \
                into providing sensitive data such as personally identifiable information, banking \
                and credit card details, and passwords.",
        sections: &[
            Section {
                heading: "Common Phishing Techniques",
                points: &[
                    "Email Phishing: Fraudulent emails that appear to be from legitimate sources",
                    "Spear Phishing: Targeted attacks on specific individuals or organizations",
                    "Whaling: Attacks targeting high-profile executives",
                    "Smishing: Phishing via SMS text messages",
                    "Vishing: Phishing via voice calls",
                ],
            },
            Section {
                heading: "How to Identify Phishing Attempts",
                points: &[
                    "Check for spelling mistakes and poor grammar",
                    "Look for generic greetings instead of personalized ones",
                    "Hover over links to see the actual URL before clicking",
                    "Be wary of urgent or threatening language",
                    "Check the sender's email address carefully",
                ],
            },
            Section {
                heading: "Protecting Yourself",
                points: &[
                    "Never provide personal information via email or text",
                    "Use two-factor authentication whenever possible",
                    "Keep your software and browsers updated",
                    "Use anti-phishing browser extensions",
                    "Report suspected phishing attempts to your IT department",
                ],
            },
        ],
    },
    LearningModule {
        id: "social",
        title: "Social Engineering",
        headline: "Understanding Social Engineering",
        intro: "Social engineering is the psychological manipulation of people into performing \
                actions or divulging confidential information. It differs from traditional hacking \
                as it relies on human interaction and often involves tricking people into breaking \
                normal security procedures.",
        sections: &[
            Section {
                heading: "Common Social Engineering Techniques",
                points: &[
                    "Pretexting: Creating a fabricated scenario to engage a targeted victim",
                    "Baiting: Offering something enticing to lure victims",
                    "Quid Pro Quo: Offering a benefit in exchange for information",
                    "Tailgating: Gaining physical access to restricted areas by following authorized personnel",
                    "Phishing: Using fake communications to extract sensitive data",
                ],
            },
            Section {
                heading: "How to Recognize Social Engineering Attacks",
                points: &[
                    "Requests for sensitive information via email or phone",
                    "Urgent or threatening language designed to prompt quick action",
                    "Offers that seem too good to be true",
                    "Requests to bypass normal security protocols",
                    "Unsolicited requests for help from \"IT support\" or \"service providers\"",
                ],
            },
            Section {
                heading: "Protection Strategies",
                points: &[
                    "Verify the identity of anyone requesting sensitive information",
                    "Be cautious of unsolicited requests, even if they appear to be from known contacts",
                    "Implement multi-factor authentication for all sensitive systems",
                    "Regularly train employees to recognize social engineering tactics",
                    "Establish clear protocols for handling sensitive information requests",
                ],
            },
        ],
    },
    LearningModule {
        id: "browsing",
        title: "Secure Browsing",
        headline: "Secure Web Browsing Practices",
        intro: "Secure browsing involves taking precautions to protect your personal information \
                and computer from online threats while using the internet. This includes being \
                aware of potential risks and implementing protective measures.",
        sections: &[
            Section {
                heading: "Essential Secure Browsing Practices",
                points: &[
                    "Use HTTPS: Always look for the padlock icon and \"https://\" in the address bar",
                    "Keep Software Updated: Regularly update your browser and plugins",
                    "Use Strong Passwords: Create unique, complex passwords for different sites",
                    "Enable Two-Factor Authentication: Add an extra layer of security to your accounts",
                    "Be Cautious with Downloads: Only download files from trusted sources",
                ],
            },
            Section {
                heading: "Browser Security Settings",
                points: &[
                    "Enable phishing and malware protection in your browser settings",
                    "Clear browsing data regularly, especially cookies and cache",
                    "Use private browsing mode when accessing sensitive information on shared devices",
                    "Disable auto-fill for forms and passwords on public computers",
                    "Review and adjust privacy settings to limit data sharing",
                ],
            },
            Section {
                heading: "Recognizing Secure Websites",
                points: &[
                    "Look for the padlock icon in the address bar",
                    "Check that the URL begins with \"https://\" rather than \"http://\"",
                    "Verify the website's security certificate if prompted by your browser",
                    "Be wary of sites with numerous pop-ups or redirects",
                    "Check for legitimate contact information and privacy policies",
                ],
            },
            Section {
                heading: "Additional Security Measures",
                points: &[
                    "Use a reputable antivirus and anti-malware solution",
                    "Consider using a VPN, especially on public Wi-Fi networks",
                    "Install browser extensions that block ads and trackers",
                    "Regularly review browser extensions and remove any you don't use",
                    "Educate yourself about current online threats and scams",
                ],
            },
        ],
    },
];

/// All learning modules, in display order.
pub fn modules() -> &'static [LearningModule] {
    &MODULES
}

/// Look up a module by id.
pub fn find_module(id: &str) -> Result<&'static LearningModule, GuardianError> {
    MODULES
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| GuardianError::UnknownModule(id.to_string()))
}
