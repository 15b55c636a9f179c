/// Sample prompts offered next to the question form, grouped by area.
pub const SAMPLE_QUESTIONS: [&str; 9] = [
    // mechanics
    "A ball is dropped from 30m height. Show free fall animation with real-time velocity and height calculations",
    "Two cars start together: Car A with constant speed 12 m/s, Car B accelerates from rest at 2 m/s². When will they meet? Show animation",
    "Simulate a block sliding down an inclined plane with adjustable angle and friction. Show forces acting in real-time",
    // waves and oscillations
    "Show a pendulum oscillating with adjustable length and damping. Display period and energy transformations",
    "Animate two waves interfering on a string. Let me adjust amplitude and phase difference to see constructive/destructive interference",
    // electricity
    "Animate charging of a capacitor in an RC circuit. Plot voltage vs time as it charges",
    // energy
    "Show a roller coaster cart moving on track with energy bar graphs (kinetic + potential)",
    // optics
    "Simulate light ray passing through a convex lens. Adjust focal length and object distance to see image formation",
    "Animate refraction of light at water–air boundary with adjustable angle of incidence",
];
