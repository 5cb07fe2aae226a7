use folio_core::{generic::Role, template::IntoPrompt};
use folio_profile::{ProfileData, fragments::SystemPrompt};

const FIXTURE: &str = r#"{
  "identity": {
    "name": "Ada Lovelace",
    "age": 36,
    "pronoun": "she/her",
    "email": "mailto:ada@engines.test",
    "github": "https://github.com/ada",
    "linkedin": "https://linkedin.com/in/ada"
  },
  "about": {
    "intro": "Intro.",
    "expertise": "Expertise.",
    "personal": "Lives in London."
  },
  "experience": [
    {
      "name": "Analytical Engines Ltd",
      "website": "https://engines.test",
      "roles": [
        {
          "position": "Programmer",
          "duration": "1842 - 1843",
          "location": "London",
          "description": ["Wrote the first program"],
          "tech_stack": ["Punch cards", "Notes"]
        }
      ]
    }
  ],
  "projects": [
    {
      "id": "notes",
      "title": "Engine Notes",
      "description": "Annotated translation.",
      "technologies": ["Ink"],
      "github": "",
      "demo": "https://notes.test",
      "featured": true
    },
    {
      "id": "secret",
      "title": "Secret Project",
      "description": "Never mentioned.",
      "technologies": ["Brass"],
      "featured": false
    }
  ],
  "education": [
    {
      "institution": "Home Schooling",
      "degree": "Mathematics",
      "duration": "1820 - 1835",
      "grade": "Excellent",
      "achievements": []
    }
  ],
  "research": [],
  "awards": [
    {
      "title": "Royal Medal",
      "kind": "award",
      "date": "1843",
      "description": "For notes.",
      "featured": true
    },
    {
      "title": "Hidden Prize",
      "kind": "certification",
      "date": "1844",
      "description": "Also never mentioned.",
      "link": "https://hidden.test",
      "featured": false
    }
  ],
  "skills": [
    { "category": "Mathematics", "skills": ["Calculus", "Logic"] }
  ]
}"#;

fn fixture() -> ProfileData {
    ProfileData::from_json_str(FIXTURE).unwrap()
}

#[test]
fn renders_sections_in_fixed_order_and_format() {
    let prompt = SystemPrompt::assemble(&fixture());

    let expected_body = "Here's everything you know about Ada:\n\n\
**Basic Info:**\n\
- Name: Ada Lovelace\n\
- Age: 36\n\
- Pronouns: she/her\n\
- Email: ada@engines.test\n\
- GitHub: https://github.com/ada\n\
- LinkedIn: https://linkedin.com/in/ada\n\
\n\
**Personal Info:**\n\
Lives in London.\n\
\n\
**About:**\n\
Intro.\n\
\n\
Expertise.\n\
\n\
**Experience:**\n\
\n\
**Analytical Engines Ltd** (https://engines.test)\n   - Programmer (1842 - 1843, London)\n     * Wrote the first program\n     * Tech: Punch cards, Notes\n\
\n\
**Education:**\n\
\n\
**Home Schooling**\n   - Mathematics\n   - Duration: 1820 - 1835\n   - Grade: Excellent\n   - Achievements: \n\
\n\
**Research:**\n\
\n\
\n\
**Featured Projects:**\n\
\n\
**Engine Notes**\n   - Annotated translation.\n   - Tech: Ink\n   - Demo: https://notes.test\n\
\n\
**Featured Awards & Certifications:**\n\
\n\
**Royal Medal**\n   - Type: award\n   - Date: 1843\n   - For notes.\n\
\n\
**Skills:**\n\
- Mathematics: Calculus, Logic\n\
\n\
Keep responses concise";

    assert!(
        prompt.as_str().contains(expected_body),
        "unexpected prompt:\n{prompt}"
    );
    assert!(prompt.as_str().starts_with(
        "You are Ada's AI companion who knows everything about her. Speak in a warm"
    ));
    assert!(prompt.as_str().contains("Use \"she\" or \"Ada\" when referring to her"));
    assert!(
        prompt
            .as_str()
            .ends_with("Don't respond to any topic other than Ada.\n")
    );
}

#[test]
fn assembling_twice_is_byte_identical() {
    let profile = fixture();
    assert_eq!(
        SystemPrompt::assemble(&profile),
        SystemPrompt::assemble(&profile.clone())
    );

    let bundled = ProfileData::bundled().unwrap();
    assert_eq!(
        SystemPrompt::assemble(&bundled).as_str(),
        SystemPrompt::assemble(&bundled).as_str()
    );
}

#[test]
fn unfeatured_entries_never_appear() {
    let prompt = SystemPrompt::assemble(&fixture());

    assert!(!prompt.as_str().contains("Secret Project"));
    assert!(!prompt.as_str().contains("Never mentioned."));
    assert!(!prompt.as_str().contains("Hidden Prize"));
    assert!(!prompt.as_str().contains("https://hidden.test"));
}

#[test]
fn empty_collections_keep_their_headings() {
    let mut profile = fixture();
    profile.experience.clear();
    profile.projects.clear();
    profile.education.clear();
    profile.awards.clear();
    profile.skills.clear();

    let prompt = SystemPrompt::assemble(&profile);
    let text = prompt.as_str();

    for heading in [
        "**Experience:**\n\n\n",
        "**Education:**\n\n\n",
        "**Research:**\n\n\n",
        "**Featured Projects:**\n\n\n",
        "**Featured Awards & Certifications:**\n\n\n",
        "**Skills:**\n\n",
    ] {
        assert!(text.contains(heading), "missing `{heading}` in:\n{text}");
    }
}

#[test]
fn headings_follow_fixed_order() {
    let prompt = SystemPrompt::assemble(&ProfileData::bundled().unwrap());
    let text = prompt.as_str();

    let positions: Vec<usize> = [
        "**Basic Info:**",
        "**Personal Info:**",
        "**About:**",
        "**Experience:**",
        "**Education:**",
        "**Research:**",
        "**Featured Projects:**",
        "**Featured Awards & Certifications:**",
        "**Skills:**",
    ]
    .iter()
    .map(|h| text.find(h).unwrap_or_else(|| panic!("missing {h}")))
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn bundled_profile_renders_links_only_when_present() {
    let prompt = SystemPrompt::assemble(&ProfileData::bundled().unwrap());
    let text = prompt.as_str();

    // BanglaRAG has empty links, Agent Whisper only a demo.
    assert!(text.contains("**BanglaRAG - Retrieval-Augmented Generation**\n   - RAG pipeline"));
    assert!(!text.contains("GitHub: \n"));
    assert!(text.contains("   - Demo: https://agent-whisper.softr.app/\n"));
    assert!(text.contains("**BRAC University** (Dhaka, Bangladesh)\n"));
    assert!(text.contains("- Work Email: tanzir@joinventureai.com\n"));
}

#[test]
fn converts_into_a_single_system_message() {
    let prompt = SystemPrompt::assemble(&fixture());
    let messages = (&prompt).into_prompt();

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[0].content, prompt.as_str());
}
