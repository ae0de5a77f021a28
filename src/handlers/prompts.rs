//! Fixed prompts sent with every detection request.

pub const SYSTEM_PROMPT: &str = "you're a helpful assistant that talks like a pirate";

pub const FOOD_DETECTION_PROMPT: &str = "Identify the food in this picture.
Estimate the calories in Cal. unit.
Estimate the carbohydrate and sugars in g unit.
Tell the name of the food only in Chinese.

Please return the content in JSON format.
example
{
    'items': ['ice', 'apple'],
    'total_calories': xx,
    'total_carbohydrate': xx,
    'total_sugars': xx
}";
