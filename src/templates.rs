use crate::models::Contact;

pub const OUTREACH_SUBJECT: &str = "Revolutionizing Your Marketing";

// Trailing spaces are part of the message and kept verbatim.
const OUTREACH_PITCH: &str = concat!(
    "We are a team of passionate Gen Z innovators ready to revolutionize the way you market yourself, your brand, or your organization. \n",
    "In today’s digital world, storytelling is everything, and we specialize in bringing your story to life through:\n",
    "\n",
    " Compelling Branding & Storytelling – We craft narratives that truly connect.\n",
    " Stunning Websites & Powerful Apps – Designed to captivate and convert.\n",
    " Social Media Management – Growing and engaging your audience effortlessly.\n",
    "\n",
    "We believe you can benefit from our services in building your online presence. Let’s collaborate and take your brand to the next level!\n",
    "\n",
    "Looking forward to discussing how we can help.\n",
    "\n",
    "Regards,  \n",
    "Digitall Marketing Solutions  \n",
    "https://digitallke.net\n",
);

#[derive(Debug, Clone, PartialEq)]
pub struct EmailTemplate {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Fills the outreach pitch for one contact.
pub fn render_outreach(contact: &Contact, from: &str) -> EmailTemplate {
    let body = format!("Hi {}, \n{} \n\n{}", contact.name, contact.job_title, OUTREACH_PITCH);

    EmailTemplate {
        from: from.to_string(),
        to: contact.email.clone(),
        subject: OUTREACH_SUBJECT.to_string(),
        body,
    }
}
