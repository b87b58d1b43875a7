// LLM prompt constants for the enhancement step.

/// Enhancement prompt template. Replace `{cv_json}` with the pretty-printed
/// document snapshot before sending.
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"You are a professional resume writer. Enhance and improve the following resume data while maintaining all original information. Return ONLY a valid JSON object with this exact structure (no markdown, no code blocks, just pure JSON):

{
  "personalInfo": {
    "firstName": "enhanced first name",
    "lastName": "enhanced last name",
    "phone": "phone number",
    "email": "email",
    "address": "address",
    "city": "city",
    "state": "state",
    "zipCode": "zipCode",
    "country": "country",
    "portfolio": "portfolio url",
    "linkedin": "linkedin url"
  },
  "jobTitle": "enhanced professional job title",
  "careerSummary": "enhanced 3-4 sentence professional summary highlighting key achievements and expertise",
  "skills": ["skill1", "skill2", "skill3"],
  "workExperience": [
    {
      "jobTitle": "job title",
      "company": "company name",
      "startDate": "start date",
      "endDate": "end date",
      "description": "enhanced 2-3 sentence description with achievements and impact"
    }
  ],
  "education": [
    {
      "degree": "degree name",
      "institution": "institution name",
      "major": "major/field",
      "startDate": "start",
      "endDate": "end"
    }
  ],
  "certifications": [
    {
      "title": "certification name",
      "organization": "org name",
      "issueDate": "date"
    }
  ]
}

Original Data:
{cv_json}

Instructions:
- Keep all original data but make it more professional and impactful
- Enhance job descriptions to highlight achievements and quantifiable results
- Improve career summary to be compelling and keyword-rich
- Keep the same structure, just improve the wording
- Return ONLY the JSON object, no other text"#;
