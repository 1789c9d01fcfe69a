// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Static text served when generation fails. Every fallback is non-empty.

use serde_json::json;

use crate::ContentKind;

/// Fallback text for `kind` about `city`.
pub fn fallback(kind: ContentKind, city: &str) -> String {
    match kind {
        ContentKind::Article => article(city),
        ContentKind::Tutorial => tutorial(),
        ContentKind::Quiz => quiz(city),
        ContentKind::ShowsIntro => shows_intro(city),
    }
}

fn article(city: &str) -> String {
    format!(
        "# {city} - Kathputli Heritage

The ancient city of {city} holds a special place in Rajasthan's rich Kathputli tradition. This \
traditional form of puppetry has been passed down through generations, with master craftsmen \
creating intricate puppets that tell stories of valor, romance, and folklore.

The puppeteers of {city} are known for their exceptional skill in bringing these wooden figures \
to life, using strings and traditional folk songs to captivate audiences. The vibrant costumes, \
detailed craftsmanship, and storytelling prowess make the Kathputli shows of {city} truly \
unforgettable.

Today, efforts are being made to preserve this ancient art form and pass it on to future \
generations."
    )
}

fn tutorial() -> String {
    "# How to Make a Kathputli Puppet

## Materials Needed
- Wooden sticks or dowels
- Fabric scraps (colorful)
- Thread and needle
- Strings
- Paint and brushes
- Cotton for stuffing

## Step 1: Create the Head
Carve or shape a wooden ball into a puppet head. Paint facial features with traditional \
Rajasthani designs.

## Step 2: Make the Body
Use fabric to create a traditional dress. Stuff with cotton to give it volume.

## Step 3: Attach Strings
Connect strings to the head, hands, and body for movement control.

## Step 4: Add Details
Decorate with mirrors, beads, and traditional embroidery."
        .to_string()
}

fn quiz(city: &str) -> String {
    json!({
        "questions": [
            {
                "question": format!(
                    "What is the primary material used for making traditional Kathputli puppets in {city}?"
                ),
                "options": ["Wood", "Clay", "Metal", "Plastic"],
                "correctAnswer": 0
            },
            {
                "question": "How are Kathputli puppets controlled?",
                "options": [
                    "Remote control",
                    "Hand inside the puppet",
                    "Strings attached to sticks",
                    "Magnets"
                ],
                "correctAnswer": 2
            },
            {
                "question": "What language are traditional Kathputli performances usually conducted in?",
                "options": ["Hindi", "English", "Rajasthani", "Sanskrit"],
                "correctAnswer": 2
            },
            {
                "question": "Which royal family is known for patronizing Kathputli art?",
                "options": ["Mughal", "Rajput", "Maratha", "Gupta"],
                "correctAnswer": 1
            },
            {
                "question": "What type of stories do Kathputli performances typically tell?",
                "options": [
                    "Modern news",
                    "Folk tales and historical legends",
                    "Science fiction",
                    "Crime dramas"
                ],
                "correctAnswer": 1
            }
        ]
    })
    .to_string()
}

fn shows_intro(city: &str) -> String {
    format!(
        "# Kathputli Performances in {city}

Puppeteers in {city} still gather audiences in courtyards, markets and festival grounds, \
where painted wooden figures dance to dholak rhythms and folk songs.

## Watching a Show
Performances are short and lively, so arrive early for a spot near the stage."
    )
}
